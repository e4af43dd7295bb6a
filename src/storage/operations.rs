//! Storage operations
//!
//! Handles create, read, update and delete of files and folders inside a
//! single folder of a `FileStorage`.

use log::info;

use crate::error::StorageError;
use crate::storage::node::{File, Folder};
use crate::storage::results::{CreateResult, DeleteResult, FileView, FolderListing, UpdateResult};
use crate::storage::tree::{FileStorage, FolderId};
use crate::storage::validation::{
    PARENT_SEGMENT, file_extension, join_path, validate_folder_name, validate_name,
};

fn folder_ref(storage: &FileStorage, id: FolderId) -> Result<&Folder, StorageError> {
    storage
        .folder(id)
        .ok_or_else(|| StorageError::FolderNotFound(format!("<removed folder #{}>", id.index())))
}

fn folder_mut(storage: &mut FileStorage, id: FolderId) -> Result<&mut Folder, StorageError> {
    storage
        .folder_mut(id)
        .ok_or_else(|| StorageError::FolderNotFound(format!("<removed folder #{}>", id.index())))
}

/// Creates an empty child folder
pub fn create_folder(
    storage: &mut FileStorage,
    parent: FolderId,
    name: &str,
) -> Result<CreateResult, StorageError> {
    validate_folder_name(name)?;

    let folder = folder_ref(storage, parent)?;
    if folder.has_folder(name) {
        return Err(StorageError::FolderAlreadyExists(name.to_string()));
    }
    let full_path = join_path(folder.full_path(), name);

    storage
        .insert_folder(parent, name)
        .ok_or_else(|| StorageError::FolderNotFound(full_path.clone()))?;

    info!("Created folder {}", full_path);
    Ok(CreateResult { full_path })
}

/// Creates a file holding `content`
pub fn create_file(
    storage: &mut FileStorage,
    parent: FolderId,
    name: &str,
    content: &str,
) -> Result<CreateResult, StorageError> {
    validate_name(name)?;

    let folder = folder_mut(storage, parent)?;
    if folder.has_file(name) {
        return Err(StorageError::FileAlreadyExists(name.to_string()));
    }

    let full_path = join_path(folder.full_path(), name);
    let file = File::new(
        full_path.clone(),
        file_extension(name).to_string(),
        content.to_string(),
    );
    folder.add_file(name.to_string(), file);

    info!("Created file {} ({} bytes)", full_path, content.len());
    Ok(CreateResult { full_path })
}

/// Replaces a file's content
pub fn update_file(
    storage: &mut FileStorage,
    parent: FolderId,
    name: &str,
    content: &str,
) -> Result<UpdateResult, StorageError> {
    validate_name(name)?;

    let file = folder_mut(storage, parent)?
        .file_mut(name)
        .ok_or_else(|| StorageError::FileNotFound(name.to_string()))?;
    file.update_content(content.to_string());

    info!("Updated file {} ({} bytes)", file.full_path(), file.size());
    Ok(UpdateResult {
        full_path: file.full_path().to_string(),
        size: file.size(),
    })
}

/// Deletes a child folder and everything below it
pub fn delete_folder(
    storage: &mut FileStorage,
    parent: FolderId,
    name: &str,
) -> Result<DeleteResult, StorageError> {
    validate_name(name)?;

    let folder = folder_ref(storage, parent)?;
    if !folder.has_folder(name) {
        return Err(StorageError::FolderNotFound(name.to_string()));
    }
    let full_path = join_path(folder.full_path(), name);

    let removed = storage
        .remove_folder(parent, name)
        .ok_or_else(|| StorageError::FolderNotFound(name.to_string()))?;

    info!(
        "Deleted folder {} ({} folders, {} files removed)",
        full_path, removed.folders, removed.files
    );
    Ok(DeleteResult {
        full_path,
        removed_folders: removed.folders,
        removed_files: removed.files,
    })
}

/// Deletes a file
pub fn delete_file(
    storage: &mut FileStorage,
    parent: FolderId,
    name: &str,
) -> Result<DeleteResult, StorageError> {
    validate_name(name)?;

    let file = folder_mut(storage, parent)?
        .remove_file(name)
        .ok_or_else(|| StorageError::FileNotFound(name.to_string()))?;

    info!("Deleted file {}", file.full_path());
    Ok(DeleteResult {
        full_path: file.full_path().to_string(),
        removed_folders: 0,
        removed_files: 1,
    })
}

/// Lists a folder's metadata and children.
///
/// Non-root folders list the parent segment first, like a shell listing.
pub fn list_folder(storage: &FileStorage, id: FolderId) -> Result<FolderListing, StorageError> {
    let folder = folder_ref(storage, id)?;

    let mut folders = Vec::with_capacity(folder.folder_count() + 1);
    if folder.parent().is_some() {
        folders.push(PARENT_SEGMENT.to_string());
    }
    folders.extend(folder.folder_names());

    Ok(FolderListing {
        full_path: folder.full_path().to_string(),
        folder_count: folder.folder_count(),
        file_count: folder.file_count(),
        folders,
        files: folder.file_names(),
    })
}

/// Reads a file's metadata and content
pub fn read_file(storage: &FileStorage, parent: FolderId, name: &str) -> Result<FileView, StorageError> {
    validate_name(name)?;

    let file = folder_ref(storage, parent)?
        .file(name)
        .ok_or_else(|| StorageError::FileNotFound(name.to_string()))?;

    Ok(FileView {
        full_path: file.full_path().to_string(),
        size: file.size(),
        extension: file.extension().to_string(),
        content: file.content().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_file_derives_metadata() {
        let mut storage = FileStorage::new();
        let root = storage.root();

        let created = create_file(&mut storage, root, "notes.txt", "hello").unwrap();
        assert_eq!(created.full_path, "/notes.txt");

        let view = read_file(&storage, root, "notes.txt").unwrap();
        assert_eq!(view.size, 5);
        assert_eq!(view.extension, "txt");
        assert_eq!(view.content, "hello");
    }

    #[test]
    fn test_duplicate_folder_leaves_counts() {
        let mut storage = FileStorage::new();
        let root = storage.root();
        create_folder(&mut storage, root, "aaa").unwrap();

        let err = create_folder(&mut storage, root, "aaa").unwrap_err();
        assert_eq!(err, StorageError::FolderAlreadyExists("aaa".into()));
        assert_eq!(storage.folder(root).unwrap().folder_count(), 1);
    }

    #[test]
    fn test_file_and_folder_may_share_a_name() {
        let mut storage = FileStorage::new();
        let root = storage.root();
        create_folder(&mut storage, root, "same").unwrap();
        create_file(&mut storage, root, "same", "").unwrap();

        let listing = list_folder(&storage, root).unwrap();
        assert_eq!(listing.folders, vec!["same".to_string()]);
        assert_eq!(listing.files, vec!["same".to_string()]);
    }

    #[test]
    fn test_file_named_parent_segment() {
        let mut storage = FileStorage::new();
        let root = storage.root();

        let created = create_file(&mut storage, root, "..", "x").unwrap();
        assert_eq!(created.full_path, "/..");
        assert_eq!(read_file(&storage, root, "..").unwrap().content, "x");
        assert!(create_file(&mut storage, root, "", "empty name").is_ok());
        assert_eq!(storage.folder(root).unwrap().file_count(), 2);

        assert!(matches!(
            create_folder(&mut storage, root, ".."),
            Err(StorageError::InvalidName(_))
        ));
        assert_eq!(storage.folder(root).unwrap().folder_count(), 0);
    }

    #[test]
    fn test_update_missing_file() {
        let mut storage = FileStorage::new();
        let root = storage.root();
        let err = update_file(&mut storage, root, "ghost", "x").unwrap_err();
        assert_eq!(err, StorageError::FileNotFound("ghost".into()));
    }

    #[test]
    fn test_delete_folder_reports_subtree() {
        let mut storage = FileStorage::new();
        let root = storage.root();
        create_folder(&mut storage, root, "aaa").unwrap();
        let aaa = storage.folder(root).unwrap().child_folder("aaa").unwrap();
        create_folder(&mut storage, aaa, "bbb").unwrap();
        create_file(&mut storage, aaa, "f", "1").unwrap();
        create_file(&mut storage, aaa, "g", "2").unwrap();

        let deleted = delete_folder(&mut storage, root, "aaa").unwrap();
        assert_eq!(deleted.full_path, "/aaa");
        assert_eq!(deleted.removed_folders, 2);
        assert_eq!(deleted.removed_files, 2);
        assert_eq!(storage.folder(root).unwrap().folder_count(), 0);
    }

    #[test]
    fn test_delete_missing_leaves_counts() {
        let mut storage = FileStorage::new();
        let root = storage.root();
        create_file(&mut storage, root, "keep", "").unwrap();

        assert!(matches!(
            delete_file(&mut storage, root, "ghost"),
            Err(StorageError::FileNotFound(_))
        ));
        assert!(matches!(
            delete_folder(&mut storage, root, "ghost"),
            Err(StorageError::FolderNotFound(_))
        ));
        assert_eq!(storage.folder(root).unwrap().file_count(), 1);
        assert_eq!(storage.folder(root).unwrap().folder_count(), 0);
    }

    #[test]
    fn test_listing_shows_parent_below_root() {
        let mut storage = FileStorage::new();
        let root = storage.root();
        create_folder(&mut storage, root, "aaa").unwrap();
        let aaa = storage.folder(root).unwrap().child_folder("aaa").unwrap();

        assert_eq!(list_folder(&storage, root).unwrap().folders, vec!["aaa".to_string()]);
        let listing = list_folder(&storage, aaa).unwrap();
        assert_eq!(listing.folders, vec!["..".to_string()]);
        assert_eq!(listing.folder_count, 0);
    }
}
