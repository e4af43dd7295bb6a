//! Module `manager`
//!
//! Defines the `FileManager` session that tracks a current folder inside a
//! `FileStorage` and runs navigation and CRUD operations against it.

use log::info;

use crate::error::{NavigateError, StorageError};
use crate::navigate::{CwdResult, PwdResult, resolve_folder};
use crate::storage::operations;
use crate::storage::validation::ROOT_PATH;
use crate::storage::{
    CreateResult, DeleteResult, FileStorage, FileView, FolderId, FolderListing, UpdateResult,
};

/// A session over one `FileStorage`.
///
/// Holds the current folder handle together with its absolute path. Both
/// are only ever replaced together, after a destination fully resolved.
pub struct FileManager<'a> {
    storage: &'a mut FileStorage,
    current_folder: FolderId,
    current_path: String,
}

impl<'a> FileManager<'a> {
    /// Opens a session positioned at the root folder.
    pub fn new(storage: &'a mut FileStorage) -> Self {
        let current_folder = storage.root();
        Self {
            storage,
            current_folder,
            current_path: ROOT_PATH.to_string(),
        }
    }

    // --------------------
    // Getter methods
    // --------------------

    /// Returns the storage this session works on.
    pub fn storage(&self) -> &FileStorage {
        &*self.storage
    }

    /// Returns the handle of the current folder.
    pub fn current_folder(&self) -> FolderId {
        self.current_folder
    }

    /// Returns the absolute path of the current folder.
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    // --------------------
    // Navigation
    // --------------------

    /// Changes the current folder.
    ///
    /// `relative` resolves `destination` from the current folder, otherwise
    /// from the root. Leading separators are not allowed in either mode; use
    /// `..` to reach the parent. On any failure the session is unchanged.
    ///
    /// A destination equal to the current absolute path is accepted before
    /// any parsing, so `/aaa` succeeds while in `/aaa` but is rejected for
    /// its leading separator from anywhere else.
    pub fn change_directory(
        &mut self,
        destination: &str,
        relative: bool,
    ) -> Result<CwdResult, NavigateError> {
        if destination == self.current_path {
            return Ok(CwdResult {
                path: self.current_path.clone(),
                changed: false,
            });
        }

        let start = if relative {
            self.current_folder
        } else {
            self.storage.root()
        };

        let target = resolve_folder(&*self.storage, start, destination)?;
        let target_path = self
            .storage
            .folder(target)
            .map(|folder| folder.full_path().to_string())
            .ok_or_else(|| NavigateError::DirectoryNotFound(destination.to_string()))?;

        let changed = target != self.current_folder;
        self.current_folder = target;
        self.current_path = target_path;

        info!("Changed directory to {}", self.current_path);
        Ok(CwdResult {
            path: self.current_path.clone(),
            changed,
        })
    }

    /// Returns the current working directory.
    pub fn working_directory(&self) -> PwdResult {
        PwdResult {
            path: self.current_path.clone(),
        }
    }

    // --------------------
    // Queries
    // --------------------

    /// Lists the metadata and children of the current folder.
    pub fn current_folder_contents(&self) -> Result<FolderListing, StorageError> {
        operations::list_folder(&*self.storage, self.current_folder)
    }

    /// Reads a file of the current folder.
    pub fn file_contents(&self, name: &str) -> Result<FileView, StorageError> {
        operations::read_file(&*self.storage, self.current_folder, name)
    }

    // --------------------
    // CRUD
    // --------------------

    /// Creates a folder in the current folder.
    pub fn create_folder(&mut self, name: &str) -> Result<CreateResult, StorageError> {
        operations::create_folder(self.storage, self.current_folder, name)
    }

    /// Creates a file in the current folder.
    pub fn create_file(&mut self, name: &str, content: &str) -> Result<CreateResult, StorageError> {
        operations::create_file(self.storage, self.current_folder, name, content)
    }

    /// Replaces the content of a file in the current folder.
    pub fn update_file(&mut self, name: &str, content: &str) -> Result<UpdateResult, StorageError> {
        operations::update_file(self.storage, self.current_folder, name, content)
    }

    /// Deletes a folder of the current folder, with everything below it.
    pub fn delete_folder(&mut self, name: &str) -> Result<DeleteResult, StorageError> {
        operations::delete_folder(self.storage, self.current_folder, name)
    }

    /// Deletes a file of the current folder.
    pub fn delete_file(&mut self, name: &str) -> Result<DeleteResult, StorageError> {
        operations::delete_file(self.storage, self.current_folder, name)
    }
}
