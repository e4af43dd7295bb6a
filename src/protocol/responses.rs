//! Response formatting
//!
//! Renders query results and failures as shell output text.

use crate::storage::{FileView, FolderListing};

/// Help text listing every shell command
pub const HELP_TEXT: &str = "\
Commands:
  PWD                     print the working directory
  LIST | LS               print the current folder
  CD <path>               change directory relative to the current folder
  CDA [path]              change directory from the root folder
  MKDIR <name>            create a folder
  RMDIR <name>            delete a folder and everything below it
  TOUCH <name> [content]  create a file
  WRITE <name> [content]  replace a file's content
  CAT <name>              print a file
  RM <name>               delete a file
  QUIT | Q | EXIT         leave the shell
File content is everything after the space that follows <name>, as typed.";

/// Format the working directory line
pub fn format_working_directory(path: &str) -> String {
    format!("Current Working Directory: {}", path)
}

/// Format a folder listing
pub fn format_folder_listing(listing: &FolderListing) -> String {
    format!(
        "Metadata: Full Path: {}, No. of folders: {}, No. of files: {}\nFolders: {}\nFiles: {}",
        listing.full_path,
        listing.folder_count,
        listing.file_count,
        listing.folders.join(", "),
        listing.files.join(", ")
    )
}

/// Format a file's metadata and content
pub fn format_file_view(view: &FileView) -> String {
    format!(
        "Metadata: Full Path: {}, File Size: {}, File Extension: {}\nContents: {}",
        view.full_path, view.size, view.extension, view.content
    )
}

/// Format a failure under its context phrase
pub fn format_error(context: &str, reason: &str) -> String {
    format!("{}: {}", context, reason)
}
