//! Library collection operations.

use tracing::debug;

use finboard_model::{EntityId, Template};

use crate::AppState;

impl AppState {
    /// Append an independent copy of `template` to the library.
    ///
    /// The copy gets a fresh id with `original_id` pointing back at the
    /// source; the source itself is left untouched.
    pub fn add_to_library(&mut self, template: &Template) {
        let copy = template.library_copy();
        debug!(id = %copy.id, source = %template.id, "add library copy");
        self.library_templates.push(copy);
    }

    /// Remove a library entry, along with its favorites and selection
    /// entries.
    pub fn remove_from_library(&mut self, id: &EntityId) {
        self.library_templates.retain(|t| &t.id != id);
        self.favorites.retain(|f| f != id);
        self.selected_library_items.remove(id);
    }

    /// Move the given library entries into the templates collection.
    ///
    /// Ids already present in templates are skipped (the library entry is
    /// still removed). Clears the library selection.
    pub fn move_items_to_templates(&mut self, ids: &[EntityId]) {
        let moved: Vec<Template> = self
            .library_templates
            .iter()
            .filter(|t| ids.contains(&t.id))
            .cloned()
            .collect();
        for item in moved {
            if self.template(&item.id).is_none() {
                self.templates_order.push(item.id.clone());
                self.templates.push(item);
            }
        }
        self.library_templates.retain(|t| !ids.contains(&t.id));
        self.selected_library_items.clear();
    }

    /// Replace the library list wholesale with a caller-supplied
    /// permutation (library order is intrinsic to the collection).
    pub fn reorder_library_templates(&mut self, templates: Vec<Template>) {
        self.library_templates = templates;
    }
}
