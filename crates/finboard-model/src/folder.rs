//! Library folders.

use serde::{Deserialize, Serialize};

use crate::EntityId;

/// A named grouping of library item ids.
///
/// `item_ids` is the display order within the folder. Membership is
/// exclusive: the store guarantees an item id appears in at most one
/// folder at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryFolder {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub item_ids: Vec<EntityId>,
}

impl LibraryFolder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::generate(Some("folder")),
            name: name.into(),
            item_ids: Vec::new(),
        }
    }

    pub fn contains(&self, item_id: &EntityId) -> bool {
        self.item_ids.contains(item_id)
    }
}
