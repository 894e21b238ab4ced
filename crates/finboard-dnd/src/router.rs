//! Gesture classification.
//!
//! [`classify`] maps the end of a drag gesture onto at most one store
//! operation. The dispatch table below is the whole contract: one arm per
//! supported `(source, target)` pair, tried in priority order, first match
//! wins. Anything that falls through (including a cross-folder
//! library-item drag, which is deliberately unsupported) is a no-op.

use tracing::debug;

use finboard_model::EntityId;
use finboard_store::{AppState, Store, StoreOp};

use crate::DragNode;

/// Decide which single store operation (if any) a finished drag gesture
/// triggers.
///
/// Pure: reads the snapshot to compute splice permutations but performs no
/// mutation. Returns `None` when the drop target is absent, when the item
/// was dropped on itself, or when the pair has no rule.
pub fn classify(state: &AppState, active: &DragNode, over: Option<&DragNode>) -> Option<StoreOp> {
    let over = over?;
    if active == over {
        return None;
    }

    let op = match (active, over) {
        // Rule 1: library item dropped on a folder header.
        (DragNode::LibraryItem { template_id }, DragNode::Folder { folder_id }) => {
            Some(StoreOp::MoveIntoFolder {
                item_id: template_id.clone(),
                folder_id: Some(folder_id.clone()),
            })
        }

        // Rule 2: library item dropped on the uncategorized zone.
        (DragNode::LibraryItem { template_id }, DragNode::LibraryDropZone) => {
            Some(StoreOp::MoveIntoFolder {
                item_id: template_id.clone(),
                folder_id: None,
            })
        }

        // Rule 3: sidebar reorder.
        (DragNode::SidebarItem { view: from }, DragNode::SidebarItem { view: to }) => {
            let old_index = state.sidebar_order.iter().position(|v| v == from)?;
            let new_index = state.sidebar_order.iter().position(|v| v == to)?;
            Some(StoreOp::ReorderSidebar(moved(
                &state.sidebar_order,
                old_index,
                new_index,
            )))
        }

        // Rule 4: template order array reorder.
        (DragNode::Template { id: from }, DragNode::Template { id: to }) => {
            let old_index = state.templates_order.iter().position(|id| id == from)?;
            let new_index = state.templates_order.iter().position(|id| id == to)?;
            Some(StoreOp::ReorderTemplates(moved(
                &state.templates_order,
                old_index,
                new_index,
            )))
        }

        // Rule 5: widget grid reorder (position is implicit in array
        // order, so the whole list is spliced).
        (DragNode::Widget { id: from }, DragNode::Widget { id: to }) => {
            let old_index = state.dashboard_widgets.iter().position(|w| &w.id == from)?;
            let new_index = state.dashboard_widgets.iter().position(|w| &w.id == to)?;
            Some(StoreOp::ReorderWidgets(moved(
                &state.dashboard_widgets,
                old_index,
                new_index,
            )))
        }

        // Rule 6: library item dropped on a library item. Reorders within
        // one folder or within the uncategorized list; a drag across
        // folder boundaries has no defined meaning here (only rules 1 and
        // 2 change membership) and falls through to a no-op.
        (
            DragNode::LibraryItem { template_id: from },
            DragNode::LibraryItem { template_id: to },
        ) => classify_library_reorder(state, from, to),

        // Rule 7: trash list reorder.
        (DragNode::TrashItem { id: from }, DragNode::TrashItem { id: to }) => {
            let old_index = state.deleted_items.iter().position(|i| &i.id == from)?;
            let new_index = state.deleted_items.iter().position(|i| &i.id == to)?;
            Some(StoreOp::ReorderDeletedItems(moved(
                &state.deleted_items,
                old_index,
                new_index,
            )))
        }

        _ => None,
    };

    if let Some(op) = &op {
        debug!(?active, ?over, ?op, "drag classified");
    }
    op
}

fn classify_library_reorder(
    state: &AppState,
    from: &EntityId,
    to: &EntityId,
) -> Option<StoreOp> {
    let from_folder = state.folder_containing(from);
    let to_folder = state.folder_containing(to);

    match (from_folder, to_folder) {
        (Some(a), Some(b)) if a.id == b.id => {
            let old_index = a.item_ids.iter().position(|id| id == from)?;
            let new_index = a.item_ids.iter().position(|id| id == to)?;
            Some(StoreOp::ReorderFolderItems {
                folder_id: a.id.clone(),
                item_ids: moved(&a.item_ids, old_index, new_index),
            })
        }
        (None, None) => {
            let old_index = state.library_templates.iter().position(|t| &t.id == from)?;
            let new_index = state.library_templates.iter().position(|t| &t.id == to)?;
            Some(StoreOp::ReorderLibraryTemplates(moved(
                &state.library_templates,
                old_index,
                new_index,
            )))
        }
        // Different folders, or foldered vs. uncategorized: unsupported.
        _ => None,
    }
}

/// Single-element list move: remove at `old_index`, insert at `new_index`.
/// Every other element keeps its relative order.
fn moved<T: Clone>(list: &[T], old_index: usize, new_index: usize) -> Vec<T> {
    let mut out = list.to_vec();
    let element = out.remove(old_index);
    out.insert(new_index, element);
    out
}

/// Classify and dispatch in one call. Returns whether an operation ran.
pub fn handle_drag_end(store: &mut Store, active: &DragNode, over: Option<&DragNode>) -> bool {
    match classify(store.state(), active, over) {
        Some(op) => {
            store.dispatch(op);
            true
        }
        None => false,
    }
}
