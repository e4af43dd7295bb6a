//! Error types
//!
//! Defines domain-specific error types for each module of the file tree.

use std::fmt;

/// Path splitting errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    LeadingSeparator(String),
    AdjacentSeparators(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::LeadingSeparator(p) => {
                write!(f, "Leading \"/\" not allowed in path: {}", p)
            }
            PathError::AdjacentSeparators(p) => {
                write!(f, "Adjacent \"/\" not allowed in path: {}", p)
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Storage module errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    InvalidName(String),
    FolderAlreadyExists(String),
    FileAlreadyExists(String),
    FolderNotFound(String),
    FileNotFound(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::InvalidName(n) => write!(f, "Invalid name: {}", n),
            StorageError::FolderAlreadyExists(n) => write!(f, "Folder already exists: {}", n),
            StorageError::FileAlreadyExists(n) => write!(f, "File already exists: {}", n),
            StorageError::FolderNotFound(n) => write!(f, "Folder doesn't exist: {}", n),
            StorageError::FileNotFound(n) => write!(f, "File doesn't exist: {}", n),
        }
    }
}

impl std::error::Error for StorageError {}

/// Navigate module errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigateError {
    Path(PathError),
    DirectoryNotFound(String),
}

impl fmt::Display for NavigateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigateError::Path(e) => write!(f, "Invalid path: {}", e),
            NavigateError::DirectoryNotFound(p) => {
                write!(f, "Destination folder can't be found: {}", p)
            }
        }
    }
}

impl std::error::Error for NavigateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NavigateError::Path(e) => Some(e),
            NavigateError::DirectoryNotFound(_) => None,
        }
    }
}

impl From<PathError> for NavigateError {
    fn from(error: PathError) -> Self {
        NavigateError::Path(error)
    }
}

/// Coarse classification of every failure the file tree can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    PathSyntax,
    InvalidName,
    AlreadyExists,
    NotFound,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::PathSyntax => "path syntax error",
            ErrorKind::InvalidName => "invalid name",
            ErrorKind::AlreadyExists => "already exists",
            ErrorKind::NotFound => "not found",
        };
        f.write_str(label)
    }
}

/// General file tree error that encompasses all error types.
///
/// Path syntax errors only ever arise while navigating, so they arrive
/// wrapped in `NavigateError::Path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTreeError {
    Storage(StorageError),
    Navigate(NavigateError),
}

impl fmt::Display for FileTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileTreeError::Storage(e) => write!(f, "Storage error: {}", e),
            FileTreeError::Navigate(e) => write!(f, "Navigate error: {}", e),
        }
    }
}

impl std::error::Error for FileTreeError {}

// Implement conversions from specific errors to FileTreeError
impl From<StorageError> for FileTreeError {
    fn from(error: StorageError) -> Self {
        FileTreeError::Storage(error)
    }
}

impl From<NavigateError> for FileTreeError {
    fn from(error: NavigateError) -> Self {
        FileTreeError::Navigate(error)
    }
}
