//! Dashboard widgets.

use serde::{Deserialize, Serialize};

use crate::{CustomField, EntityId, Template, TemplateConfig, TemplateKind};

/// A live, positioned instantiation of a template on the dashboard.
///
/// `template_id` is a back-reference, not an ownership link: the widget
/// keeps its own copy of the config and custom fields and is mutated
/// independently of its source template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardWidget {
    pub id: EntityId,
    pub template_id: EntityId,
    pub title: String,
    pub kind: TemplateKind,
    pub position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<TemplateConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomField>,
    /// Hidden widgets exist only for the detail view and are excluded from
    /// the main grid.
    #[serde(default)]
    pub is_hidden: bool,
}

impl DashboardWidget {
    /// Instantiate a template as a widget at the given grid position.
    pub fn from_template(template: &Template, position: usize) -> Self {
        Self {
            id: EntityId::generate(Some("widget")),
            template_id: template.id.clone(),
            title: template.title.clone(),
            kind: template.kind,
            position,
            config: template.config.clone(),
            custom_fields: template.custom_fields.clone(),
            is_hidden: false,
        }
    }
}
