//! Error handlers
//!
//! Provides error reporting and classification functions.

use crate::error::types::{ErrorKind, FileTreeError, NavigateError, StorageError};
use log::error;

/// Report a file tree error under the given context phrase
pub fn handle_error(context: &str, err: &FileTreeError) {
    error!("{}: {}", context, err);
}

/// Convert error to its coarse kind
pub fn error_kind(err: &FileTreeError) -> ErrorKind {
    match err {
        FileTreeError::Navigate(NavigateError::Path(_)) => ErrorKind::PathSyntax,
        FileTreeError::Navigate(NavigateError::DirectoryNotFound(_)) => ErrorKind::NotFound,
        FileTreeError::Storage(StorageError::InvalidName(_)) => ErrorKind::InvalidName,
        FileTreeError::Storage(StorageError::FolderAlreadyExists(_))
        | FileTreeError::Storage(StorageError::FileAlreadyExists(_)) => ErrorKind::AlreadyExists,
        FileTreeError::Storage(StorageError::FolderNotFound(_))
        | FileTreeError::Storage(StorageError::FileNotFound(_)) => ErrorKind::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PathError;

    #[test]
    fn test_error_kind_mapping() {
        let adjacent = NavigateError::Path(PathError::AdjacentSeparators("a//b".into()));
        assert_eq!(error_kind(&adjacent.into()), ErrorKind::PathSyntax);

        let missing = NavigateError::DirectoryNotFound("x".into());
        assert_eq!(error_kind(&missing.into()), ErrorKind::NotFound);

        let invalid = StorageError::InvalidName("a/b".into());
        assert_eq!(error_kind(&invalid.into()), ErrorKind::InvalidName);

        let dup = StorageError::FileAlreadyExists("f".into());
        assert_eq!(error_kind(&dup.into()), ErrorKind::AlreadyExists);

        let gone = StorageError::FolderNotFound("d".into());
        assert_eq!(error_kind(&gone.into()), ErrorKind::NotFound);
    }

    #[test]
    fn test_display_keeps_module_prefix() {
        let err: FileTreeError = StorageError::FileNotFound("yoyo".into()).into();
        assert_eq!(err.to_string(), "Storage error: File doesn't exist: yoyo");
    }

    #[test]
    fn test_path_errors_arrive_through_navigation() {
        let err: FileTreeError = NavigateError::from(PathError::LeadingSeparator("/x".into())).into();
        assert!(matches!(
            err,
            FileTreeError::Navigate(NavigateError::Path(PathError::LeadingSeparator(_)))
        ));
        assert_eq!(error_kind(&err), ErrorKind::PathSyntax);
        assert_eq!(
            err.to_string(),
            "Navigate error: Invalid path: Leading \"/\" not allowed in path: /x"
        );
    }
}
