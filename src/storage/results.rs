//! Storage result types
//!
//! Defines result structures returned by storage operations.

/// Result of a file or folder creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateResult {
    pub full_path: String,
}

/// Result of a file content update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResult {
    pub full_path: String,
    pub size: usize,
}

/// Result of a file or folder deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    pub full_path: String,
    pub removed_folders: usize,
    pub removed_files: usize,
}

/// Snapshot of a folder's metadata and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderListing {
    pub full_path: String,
    pub folder_count: usize,
    pub file_count: usize,
    pub folders: Vec<String>,
    pub files: Vec<String>,
}

/// Snapshot of a file's metadata and content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileView {
    pub full_path: String,
    pub size: usize,
    pub extension: String,
    pub content: String,
}
