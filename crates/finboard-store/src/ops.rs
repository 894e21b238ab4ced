//! The operation enum.
//!
//! Every documented state transition has exactly one variant here, and
//! [`AppState::apply`] is the single dispatch point. Collaborators that
//! need to describe a transition without performing it (the drag router,
//! bulk helpers, tests) build a `StoreOp` value; the [`crate::Store`]
//! container applies it and notifies subscribers.

use finboard_model::{
    DashboardWidget, DeletedItem, EntityId, Goal, Template, TrashPayload, View,
};

use crate::AppState;
use crate::patch::{GoalPatch, TemplatePatch, WidgetPatch};
use crate::trash::RestoreTarget;

/// A single domain-store transition.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreOp {
    // Creation
    AddTemplate(Template),
    AddToLibrary(Template),
    AddToDashboard(Template),
    AddGoal(Goal),
    CreateFolder(String),

    // Mutation
    UpdateTemplate { id: EntityId, patch: TemplatePatch },
    UpdateWidget { id: EntityId, patch: WidgetPatch },
    UpdateGoal { id: EntityId, patch: GoalPatch },
    RenameFolder { id: EntityId, name: String },
    DeleteFolder(EntityId),
    RemoveFromLibrary(EntityId),
    RemoveFromDashboard(EntityId),
    ToggleFavorite(EntityId),
    MoveIntoFolder {
        item_id: EntityId,
        folder_id: Option<EntityId>,
    },
    MoveItemsToTemplates(Vec<EntityId>),

    // Reordering
    ReorderTemplates(Vec<EntityId>),
    ReorderGoals(Vec<EntityId>),
    ReorderSidebar(Vec<View>),
    ReorderWidgets(Vec<DashboardWidget>),
    ReorderLibraryTemplates(Vec<Template>),
    ReorderFolderItems {
        folder_id: EntityId,
        item_ids: Vec<EntityId>,
    },
    ReorderDeletedItems(Vec<DeletedItem>),

    // Trash
    MoveToTrash(TrashPayload),
    RestoreFromTrash {
        id: EntityId,
        target: RestoreTarget,
    },
    RestoreSelectedFromTrash(RestoreTarget),
    RestoreAllFromTrash(RestoreTarget),
    PermanentDelete(EntityId),
    PermanentDeleteSelected,
    EmptyTrash,

    // Selection
    SetSelectedTemplate { id: EntityId, selected: bool },
    SelectAllTemplates(bool),
    SetSelectedLibraryItem { id: EntityId, selected: bool },
    SelectAllLibraryItems(bool),
    SetSelectedTrashItem { id: EntityId, selected: bool },
    SelectAllTrashItems(bool),

    // Bulk actions
    AddSelectedToLibrary,
    TrashSelectedTemplates,
    TrashSelectedLibraryItems,
    MoveSelectedToFolder(Option<EntityId>),
    MoveSelectedToTemplates,
}

impl AppState {
    /// Apply one transition. Total: unknown ids are no-ops, never errors.
    pub fn apply(&mut self, op: StoreOp) {
        match op {
            StoreOp::AddTemplate(template) => self.add_template(template),
            StoreOp::AddToLibrary(template) => self.add_to_library(&template),
            StoreOp::AddToDashboard(template) => self.add_to_dashboard(&template),
            StoreOp::AddGoal(goal) => self.add_goal(goal),
            StoreOp::CreateFolder(name) => self.create_folder(name),

            StoreOp::UpdateTemplate { id, patch } => self.update_template(&id, patch),
            StoreOp::UpdateWidget { id, patch } => self.update_widget(&id, patch),
            StoreOp::UpdateGoal { id, patch } => self.update_goal(&id, patch),
            StoreOp::RenameFolder { id, name } => self.rename_folder(&id, name),
            StoreOp::DeleteFolder(id) => self.delete_folder(&id),
            StoreOp::RemoveFromLibrary(id) => self.remove_from_library(&id),
            StoreOp::RemoveFromDashboard(id) => self.remove_from_dashboard(&id),
            StoreOp::ToggleFavorite(id) => self.toggle_favorite(&id),
            StoreOp::MoveIntoFolder { item_id, folder_id } => {
                self.move_into_folder(&item_id, folder_id.as_ref());
            }
            StoreOp::MoveItemsToTemplates(ids) => self.move_items_to_templates(&ids),

            StoreOp::ReorderTemplates(order) => self.reorder_templates(order),
            StoreOp::ReorderGoals(order) => self.reorder_goals(order),
            StoreOp::ReorderSidebar(order) => self.reorder_sidebar(order),
            StoreOp::ReorderWidgets(widgets) => self.reorder_widgets(widgets),
            StoreOp::ReorderLibraryTemplates(templates) => {
                self.reorder_library_templates(templates);
            }
            StoreOp::ReorderFolderItems {
                folder_id,
                item_ids,
            } => self.reorder_folder_items(&folder_id, item_ids),
            StoreOp::ReorderDeletedItems(items) => self.reorder_deleted_items(items),

            StoreOp::MoveToTrash(payload) => self.move_to_trash(payload),
            StoreOp::RestoreFromTrash { id, target } => self.restore_from_trash(&id, target),
            StoreOp::RestoreSelectedFromTrash(target) => self.restore_selected_from_trash(target),
            StoreOp::RestoreAllFromTrash(target) => self.restore_all_from_trash(target),
            StoreOp::PermanentDelete(id) => self.permanent_delete(&id),
            StoreOp::PermanentDeleteSelected => self.permanent_delete_selected(),
            StoreOp::EmptyTrash => self.empty_trash(),

            StoreOp::SetSelectedTemplate { id, selected } => {
                self.set_selected_template(&id, selected);
            }
            StoreOp::SelectAllTemplates(selected) => self.select_all_templates(selected),
            StoreOp::SetSelectedLibraryItem { id, selected } => {
                self.set_selected_library_item(&id, selected);
            }
            StoreOp::SelectAllLibraryItems(selected) => self.select_all_library_items(selected),
            StoreOp::SetSelectedTrashItem { id, selected } => {
                self.set_selected_trash_item(&id, selected);
            }
            StoreOp::SelectAllTrashItems(selected) => self.select_all_trash_items(selected),

            StoreOp::AddSelectedToLibrary => self.add_selected_to_library(),
            StoreOp::TrashSelectedTemplates => self.trash_selected_templates(),
            StoreOp::TrashSelectedLibraryItems => self.trash_selected_library_items(),
            StoreOp::MoveSelectedToFolder(folder_id) => {
                self.move_selected_to_folder(folder_id.as_ref());
            }
            StoreOp::MoveSelectedToTemplates => self.move_selected_to_templates(),
        }
    }
}
