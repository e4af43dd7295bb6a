//! In-memory file storage
//!
//! Holds the folder tree, its nodes, name validation and the CRUD
//! operations applied to a single folder.

pub mod node;
pub mod operations;
pub mod results;
pub mod tree;
pub mod validation;

pub use node::{File, Folder};
pub use results::{CreateResult, DeleteResult, FileView, FolderListing, UpdateResult};
pub use tree::{FileStorage, FolderId};
