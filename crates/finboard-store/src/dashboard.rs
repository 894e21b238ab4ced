//! Dashboard widget operations.

use tracing::debug;

use finboard_model::{DashboardWidget, EntityId, Template};

use crate::AppState;
use crate::patch::WidgetPatch;

impl AppState {
    /// Instantiate a template as a widget at the end of the grid.
    pub fn add_to_dashboard(&mut self, template: &Template) {
        let widget = DashboardWidget::from_template(template, self.dashboard_widgets.len());
        debug!(id = %widget.id, template = %template.id, "add widget");
        self.dashboard_widgets.push(widget);
    }

    pub fn remove_from_dashboard(&mut self, id: &EntityId) {
        self.dashboard_widgets.retain(|w| &w.id != id);
    }

    /// Shallow-merge `patch` into the matching widget. A patch carrying a
    /// config replaces the widget's config wholesale. No-op if the id is
    /// unknown.
    pub fn update_widget(&mut self, id: &EntityId, patch: WidgetPatch) {
        let Some(widget) = self.dashboard_widgets.iter_mut().find(|w| &w.id == id) else {
            return;
        };
        if let Some(title) = patch.title {
            widget.title = title;
        }
        if let Some(position) = patch.position {
            widget.position = position;
        }
        if let Some(config) = patch.config {
            widget.config = Some(config);
        }
        if let Some(custom_fields) = patch.custom_fields {
            widget.custom_fields = custom_fields;
        }
        if let Some(is_hidden) = patch.is_hidden {
            widget.is_hidden = is_hidden;
        }
    }

    /// Replace the widget list wholesale with a caller-supplied
    /// permutation (grid position is implicit in array order).
    pub fn reorder_widgets(&mut self, widgets: Vec<DashboardWidget>) {
        self.dashboard_widgets = widgets;
    }
}
