//! Multi-select sets and bulk actions.
//!
//! Each selectable view (templates, library, trash) owns one selection
//! set. Bulk actions translate into one single-item store call per
//! selected id and clear the selection afterward; they are not atomic
//! across items, which is acceptable because every single-item operation
//! is total.

use finboard_model::{EntityId, Template, TrashPayload, catalog};

use crate::AppState;

impl AppState {
    // -------------------------------------------------------------------
    // Membership toggles
    // -------------------------------------------------------------------

    pub fn set_selected_template(&mut self, id: &EntityId, selected: bool) {
        if selected {
            self.selected_templates.insert(id.clone());
        } else {
            self.selected_templates.remove(id);
        }
    }

    /// Select (or clear) the templates view.
    ///
    /// Selects against the full built-in catalog, not the currently
    /// visible set. Kept as-is from the original product behavior.
    pub fn select_all_templates(&mut self, selected: bool) {
        self.selected_templates.clear();
        if selected {
            self.selected_templates
                .extend(catalog::builtin_templates().into_iter().map(|t| t.id));
        }
    }

    pub fn set_selected_library_item(&mut self, id: &EntityId, selected: bool) {
        if selected {
            self.selected_library_items.insert(id.clone());
        } else {
            self.selected_library_items.remove(id);
        }
    }

    /// Select (or clear) every current library entry.
    pub fn select_all_library_items(&mut self, selected: bool) {
        self.selected_library_items.clear();
        if selected {
            let ids: Vec<EntityId> = self.library_templates.iter().map(|t| t.id.clone()).collect();
            self.selected_library_items.extend(ids);
        }
    }

    pub fn set_selected_trash_item(&mut self, id: &EntityId, selected: bool) {
        if selected {
            self.selected_trash_items.insert(id.clone());
        } else {
            self.selected_trash_items.remove(id);
        }
    }

    /// Select (or clear) every current trash entry.
    pub fn select_all_trash_items(&mut self, selected: bool) {
        self.selected_trash_items.clear();
        if selected {
            let ids: Vec<EntityId> = self.deleted_items.iter().map(|i| i.id.clone()).collect();
            self.selected_trash_items.extend(ids);
        }
    }

    // -------------------------------------------------------------------
    // Bulk actions (templates view)
    // -------------------------------------------------------------------

    /// Copy every selected template into the library, then clear the
    /// selection. Selected ids resolve against user templates first, then
    /// the built-in catalog (select-all selects catalog ids).
    pub fn add_selected_to_library(&mut self) {
        let selected: Vec<Template> = {
            let catalog = catalog::builtin_templates();
            self.selected_templates
                .iter()
                .filter_map(|id| {
                    self.template(id)
                        .cloned()
                        .or_else(|| catalog.iter().find(|t| &t.id == id).cloned())
                })
                .collect()
        };
        for template in &selected {
            self.add_to_library(template);
        }
        self.selected_templates.clear();
    }

    /// Trash every selected user template, then clear the selection.
    /// Catalog-only ids (nothing to cut) are skipped.
    pub fn trash_selected_templates(&mut self) {
        let selected: Vec<Template> = self
            .templates
            .iter()
            .filter(|t| self.selected_templates.contains(&t.id))
            .cloned()
            .collect();
        for template in selected {
            self.move_to_trash(TrashPayload::Template(template));
        }
        self.selected_templates.clear();
    }

    // -------------------------------------------------------------------
    // Bulk actions (library view)
    // -------------------------------------------------------------------

    /// Trash every selected library entry, then clear the selection.
    pub fn trash_selected_library_items(&mut self) {
        let selected: Vec<Template> = self
            .library_templates
            .iter()
            .filter(|t| self.selected_library_items.contains(&t.id))
            .cloned()
            .collect();
        for template in selected {
            self.move_to_trash(TrashPayload::Template(template));
        }
        self.selected_library_items.clear();
    }

    /// Move every selected library entry into `folder_id` (or out of any
    /// folder when `None`), then clear the selection.
    pub fn move_selected_to_folder(&mut self, folder_id: Option<&EntityId>) {
        let ids: Vec<EntityId> = self.selected_library_items.iter().cloned().collect();
        for id in &ids {
            self.move_into_folder(id, folder_id);
        }
        self.selected_library_items.clear();
    }

    /// Move every selected library entry back into the templates
    /// collection. Clears the selection via
    /// [`AppState::move_items_to_templates`].
    pub fn move_selected_to_templates(&mut self) {
        let ids: Vec<EntityId> = self.selected_library_items.iter().cloned().collect();
        self.move_items_to_templates(&ids);
    }
}
