//! Name validation
//!
//! Handles file and folder name checks and path joining.

use crate::error::StorageError;

/// Separator between path segments
pub const SEPARATOR: char = '/';

/// Two separators in a row, which would make an empty segment
pub const ADJACENT_SEPARATORS: &str = "//";

/// Full path of the root folder
pub const ROOT_PATH: &str = "/";

/// Segment that always refers to the parent folder
pub const PARENT_SEGMENT: &str = "..";

/// Checks that a bare file or folder name does not contain the separator.
pub fn validate_name(name: &str) -> Result<(), StorageError> {
    if name.contains(SEPARATOR) {
        return Err(StorageError::InvalidName(format!(
            "File or folder names can't contain \"{}\" in them: {}",
            SEPARATOR, name
        )));
    }

    Ok(())
}

/// Checks a name for a new folder.
///
/// On top of `validate_name`, the parent segment is reserved: a child folder
/// named `..` could never be reached by a path.
pub fn validate_folder_name(name: &str) -> Result<(), StorageError> {
    validate_name(name)?;

    if name == PARENT_SEGMENT {
        return Err(StorageError::InvalidName(format!(
            "\"{}\" is reserved for the parent folder",
            PARENT_SEGMENT
        )));
    }

    Ok(())
}

/// Returns the substring after the last `.` of a file name, or an empty string.
pub fn file_extension(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map(|(_, extension)| extension)
        .unwrap_or("")
}

/// Joins a folder's full path with a child name
pub fn join_path(parent_path: &str, name: &str) -> String {
    if parent_path == ROOT_PATH {
        format!("{}{}", ROOT_PATH, name)
    } else {
        format!("{}{}{}", parent_path, SEPARATOR, name)
    }
}
