//! File storage tree
//!
//! Owns every folder of the hierarchy in an arena addressed by `FolderId`
//! handles. Think of a `FileStorage` as a partition or a disk.

use log::debug;

use crate::storage::node::Folder;
use crate::storage::validation::{ROOT_PATH, join_path};

/// Handle to a folder slot in a `FileStorage`.
///
/// A slot's generation is bumped every time its folder is removed, so a
/// handle to a removed folder stays dangling even after the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FolderId {
    index: usize,
    generation: u32,
}

impl FolderId {
    /// Get the raw slot index
    pub fn index(self) -> usize {
        self.index
    }
}

/// Totals removed by a cascading folder removal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovedSubtree {
    pub folders: usize,
    pub files: usize,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    folder: Option<Folder>,
}

/// Single-rooted n-ary tree of folders and files.
#[derive(Debug)]
pub struct FileStorage {
    slots: Vec<Slot>,
    free: Vec<usize>,
    live_folders: usize,
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStorage {
    const ROOT: FolderId = FolderId {
        index: 0,
        generation: 0,
    };

    /// Creates a storage holding only the root folder.
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                generation: 0,
                folder: Some(Folder::new(ROOT_PATH.to_string(), None)),
            }],
            free: Vec::new(),
            live_folders: 1,
        }
    }

    pub fn root(&self) -> FolderId {
        Self::ROOT
    }

    /// Returns the folder behind a handle, or `None` if it was removed.
    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.folder.as_ref())
    }

    pub(crate) fn folder_mut(&mut self, id: FolderId) -> Option<&mut Folder> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.folder.as_mut())
    }

    /// Number of live folders, root included.
    pub fn live_folders(&self) -> usize {
        self.live_folders
    }

    /// Number of allocated slots, live or free.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Allocates a new folder under `parent` and links it by name.
    ///
    /// Returns `None` if the parent handle is dangling. Name validation and
    /// collision checks are the caller's job.
    pub(crate) fn insert_folder(&mut self, parent: FolderId, name: &str) -> Option<FolderId> {
        let full_path = join_path(self.folder(parent)?.full_path(), name);
        let folder = Folder::new(full_path, Some(parent));

        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.folder = Some(folder);
                FolderId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    folder: Some(folder),
                });
                FolderId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        };
        self.live_folders += 1;

        self.folder_mut(parent)?.add_folder(name.to_string(), id);
        Some(id)
    }

    /// Unlinks the named child of `parent` and frees its whole subtree.
    pub(crate) fn remove_folder(&mut self, parent: FolderId, name: &str) -> Option<RemovedSubtree> {
        let child = self.folder_mut(parent)?.remove_folder(name)?;

        let mut removed = RemovedSubtree::default();
        let mut pending = vec![child];
        while let Some(id) = pending.pop() {
            if let Some(folder) = self.release_slot(id) {
                removed.folders += 1;
                removed.files += folder.file_count();
                pending.extend(folder.child_folder_ids());
            }
        }

        self.live_folders -= removed.folders;
        Some(removed)
    }

    /// Takes the folder out of its slot and puts the slot on the free list.
    fn release_slot(&mut self, id: FolderId) -> Option<Folder> {
        let slot = self
            .slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)?;
        let folder = slot.folder.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        Some(folder)
    }
}

impl Drop for FileStorage {
    fn drop(&mut self) {
        debug!("File storage dropped ({} live folders)", self.live_folders);
    }
}
