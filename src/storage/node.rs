//! Tree nodes
//!
//! Defines the `File` and `Folder` nodes held by a `FileStorage`.

use std::collections::HashMap;

use crate::storage::tree::FolderId;

/// A file stored in a folder.
///
/// The size always equals the byte length of the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    size: usize,
    full_path: String,
    extension: String,
    content: String,
}

impl File {
    pub(crate) fn new(full_path: String, extension: String, content: String) -> Self {
        Self {
            size: content.len(),
            full_path,
            extension,
            content,
        }
    }

    /// Replaces the content and recomputes the size.
    pub(crate) fn update_content(&mut self, content: String) {
        self.size = content.len();
        self.content = content;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A folder in the tree.
///
/// Files are owned directly. Child folders live in the storage arena and are
/// referenced by handle; the parent handle is lookup-only.
#[derive(Debug)]
pub struct Folder {
    full_path: String,
    parent: Option<FolderId>,
    folders: HashMap<String, FolderId>,
    files: HashMap<String, File>,
    folder_count: usize,
    file_count: usize,
}

impl Folder {
    pub(crate) fn new(full_path: String, parent: Option<FolderId>) -> Self {
        Self {
            full_path,
            parent,
            folders: HashMap::new(),
            files: HashMap::new(),
            folder_count: 0,
            file_count: 0,
        }
    }

    // --------------------
    // Getter methods
    // --------------------

    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Returns the parent handle, `None` for the root.
    pub fn parent(&self) -> Option<FolderId> {
        self.parent
    }

    pub fn folder_count(&self) -> usize {
        self.folder_count
    }

    pub fn file_count(&self) -> usize {
        self.file_count
    }

    pub fn child_folder(&self, name: &str) -> Option<FolderId> {
        self.folders.get(name).copied()
    }

    pub fn has_folder(&self, name: &str) -> bool {
        self.folders.contains_key(name)
    }

    pub fn file(&self, name: &str) -> Option<&File> {
        self.files.get(name)
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    /// Child folder names, sorted.
    pub fn folder_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.folders.keys().cloned().collect();
        names.sort();
        names
    }

    /// File names, sorted.
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.files.keys().cloned().collect();
        names.sort();
        names
    }

    pub(crate) fn child_folder_ids(&self) -> impl Iterator<Item = FolderId> + '_ {
        self.folders.values().copied()
    }

    // --------------------
    // Mutation methods
    // --------------------

    pub(crate) fn add_folder(&mut self, name: String, id: FolderId) {
        self.folders.insert(name, id);
        self.folder_count += 1;
    }

    pub(crate) fn remove_folder(&mut self, name: &str) -> Option<FolderId> {
        let id = self.folders.remove(name)?;
        self.folder_count -= 1;
        Some(id)
    }

    pub(crate) fn add_file(&mut self, name: String, file: File) {
        self.files.insert(name, file);
        self.file_count += 1;
    }

    pub(crate) fn remove_file(&mut self, name: &str) -> Option<File> {
        let file = self.files.remove(name)?;
        self.file_count -= 1;
        Some(file)
    }

    pub(crate) fn file_mut(&mut self, name: &str) -> Option<&mut File> {
        self.files.get_mut(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_size_tracks_content() {
        let mut file = File::new("/yoyo".into(), String::new(), "huhu".into());
        assert_eq!(file.size(), 4);

        file.update_content("huuuuuuuuuuuuuuuuuuuuu".into());
        assert_eq!(file.size(), 22);
        assert_eq!(file.content(), "huuuuuuuuuuuuuuuuuuuuu");
        assert_eq!(file.full_path(), "/yoyo");
    }

    #[test]
    fn test_folder_counts_follow_maps() {
        let mut folder = Folder::new("/".into(), None);
        folder.add_file("a.txt".into(), File::new("/a.txt".into(), "txt".into(), String::new()));
        folder.add_file("b".into(), File::new("/b".into(), String::new(), String::new()));
        assert_eq!(folder.file_count(), 2);

        assert!(folder.remove_file("a.txt").is_some());
        assert!(folder.remove_file("a.txt").is_none());
        assert_eq!(folder.file_count(), 1);
        assert_eq!(folder.file_names(), vec!["b".to_string()]);
    }
}
