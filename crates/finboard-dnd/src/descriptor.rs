//! Drag descriptors.
//!
//! The drag runtime (whichever UI library drives the gestures) reports the
//! dragged item and the drop target as descriptor values; the router cares
//! about nothing else from the gesture.

use serde::{Deserialize, Serialize};

use finboard_model::{EntityId, View};

/// One endpoint of a drag gesture: either the dragged item or the drop
/// target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum DragNode {
    /// A card in the templates view.
    Template { id: EntityId },
    /// A card in the library view; carries the underlying template id
    /// (the sortable handle id is not the entity id).
    LibraryItem { template_id: EntityId },
    /// A widget on the dashboard grid.
    Widget { id: EntityId },
    /// A folder header in the library view (drop target for rule 1).
    Folder { folder_id: EntityId },
    /// A sidebar navigation entry.
    SidebarItem { view: View },
    /// An entry in the trash view.
    TrashItem { id: EntityId },
    /// The synthetic, always-present "uncategorized" drop zone in the
    /// library view.
    LibraryDropZone,
}
