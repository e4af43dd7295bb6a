//! Navigation operations implementation

use crate::error::NavigateError;
use crate::navigate::path::split_path;
use crate::storage::validation::PARENT_SEGMENT;
use crate::storage::{FileStorage, FolderId};

/// Walks `segments` from `start`, following `..` through parent links.
pub fn resolve_segments(
    storage: &FileStorage,
    start: FolderId,
    segments: &[String],
) -> Result<FolderId, NavigateError> {
    let mut current = start;

    for segment in segments {
        let folder = storage
            .folder(current)
            .ok_or_else(|| NavigateError::DirectoryNotFound(segment.clone()))?;

        let next = if segment == PARENT_SEGMENT {
            folder.parent()
        } else {
            folder.child_folder(segment)
        };

        current = next.ok_or_else(|| NavigateError::DirectoryNotFound(segment.clone()))?;
    }

    Ok(current)
}

/// Resolves a destination path to a folder handle without touching any state
pub fn resolve_folder(
    storage: &FileStorage,
    start: FolderId,
    destination: &str,
) -> Result<FolderId, NavigateError> {
    let segments = split_path(destination)?;
    resolve_segments(storage, start, &segments)
}
