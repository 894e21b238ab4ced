//! Reusable tool definitions.

use serde::{Deserialize, Serialize};

use crate::{EntityId, TemplateConfig, TemplateKind};

/// A user-defined label/value pair attached to a template or widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomField {
    pub id: EntityId,
    pub label: String,
    pub value: String,
}

/// A reusable tool definition, not yet attached to the dashboard.
///
/// The same logical template can exist simultaneously in the templates
/// collection and as one or more independent library copies; copies get a
/// fresh id and a back-reference in `original_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub kind: TemplateKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<TemplateConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomField>,
    /// Source template this entry was cloned from (library copies only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_id: Option<EntityId>,
}

impl Template {
    pub fn new(
        id: EntityId,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: TemplateKind,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            kind,
            config: None,
            custom_fields: Vec::new(),
            original_id: None,
        }
    }

    pub fn with_config(mut self, config: TemplateConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Independent copy for the library: fresh id, `original_id` pointing
    /// back at this template, everything else value-copied.
    pub fn library_copy(&self) -> Self {
        Self {
            id: EntityId::derive_library_id(&self.id),
            original_id: Some(self.id.clone()),
            ..self.clone()
        }
    }
}
