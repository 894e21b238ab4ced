//! Template collection operations.

use tracing::debug;

use finboard_model::{EntityId, Template};

use crate::AppState;
use crate::patch::TemplatePatch;

impl AppState {
    /// Prepend a template and its id to the order array.
    ///
    /// No uniqueness check is performed; the caller supplies a fresh id
    /// (see [`EntityId::generate`]).
    pub fn add_template(&mut self, template: Template) {
        debug!(id = %template.id, kind = %template.kind, "add template");
        self.templates_order.insert(0, template.id.clone());
        self.templates.insert(0, template);
    }

    /// Shallow-merge `patch` into the matching template. Looks in the
    /// templates collection first, then the library (ids never collide
    /// across the two). No-op if the id is unknown.
    pub fn update_template(&mut self, id: &EntityId, patch: TemplatePatch) {
        let Some(template) = self
            .templates
            .iter_mut()
            .find(|t| &t.id == id)
            .or_else(|| self.library_templates.iter_mut().find(|t| &t.id == id))
        else {
            return;
        };
        if let Some(title) = patch.title {
            template.title = title;
        }
        if let Some(description) = patch.description {
            template.description = description;
        }
        if let Some(kind) = patch.kind {
            template.kind = kind;
        }
        if let Some(config) = patch.config {
            template.config = Some(config);
        }
        if let Some(custom_fields) = patch.custom_fields {
            template.custom_fields = custom_fields;
        }
    }

    /// Flip membership in the favorites list.
    pub fn toggle_favorite(&mut self, id: &EntityId) {
        if let Some(pos) = self.favorites.iter().position(|f| f == id) {
            self.favorites.remove(pos);
        } else {
            self.favorites.push(id.clone());
        }
    }

    pub fn remove_from_favorites(&mut self, id: &EntityId) {
        self.favorites.retain(|f| f != id);
    }

    /// Replace the template order wholesale with a caller-supplied
    /// permutation. The permutation is not validated.
    pub fn reorder_templates(&mut self, order: Vec<EntityId>) {
        self.templates_order = order;
    }
}
