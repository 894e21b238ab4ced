//! Library folder operations.
//!
//! Folder membership is exclusive: `move_into_folder` strips the item from
//! every folder before adding it to the target, so an item id appears in
//! at most one folder's `item_ids` at any time.

use finboard_model::{EntityId, LibraryFolder};

use crate::AppState;

impl AppState {
    pub fn create_folder(&mut self, name: impl Into<String>) {
        self.library_folders.push(LibraryFolder::new(name));
    }

    pub fn rename_folder(&mut self, id: &EntityId, name: impl Into<String>) {
        if let Some(folder) = self.library_folders.iter_mut().find(|f| &f.id == id) {
            folder.name = name.into();
        }
    }

    pub fn delete_folder(&mut self, id: &EntityId) {
        self.library_folders.retain(|f| &f.id != id);
    }

    /// Move an item into `folder_id`, or out of any folder when `None`.
    ///
    /// The removal pass runs unconditionally, which both enforces
    /// exclusivity and makes the call idempotent.
    pub fn move_into_folder(&mut self, item_id: &EntityId, folder_id: Option<&EntityId>) {
        for folder in &mut self.library_folders {
            folder.item_ids.retain(|id| id != item_id);
        }
        if let Some(folder_id) = folder_id
            && let Some(folder) = self.library_folders.iter_mut().find(|f| &f.id == folder_id)
        {
            folder.item_ids.push(item_id.clone());
        }
    }

    /// Replace a folder's item order wholesale with a caller-supplied
    /// permutation.
    pub fn reorder_folder_items(&mut self, folder_id: &EntityId, item_ids: Vec<EntityId>) {
        if let Some(folder) = self.library_folders.iter_mut().find(|f| &f.id == folder_id) {
            folder.item_ids = item_ids;
        }
    }
}
