//! Shallow-merge patch types for the update operations.
//!
//! A `None` field leaves the current value untouched. A patch carrying a
//! config replaces the config value wholesale: the typed config union has
//! no partial shape, so callers build the full variant from the current
//! snapshot before patching.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use finboard_model::{CustomField, TemplateConfig, TemplateKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplatePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: Option<TemplateKind>,
    pub config: Option<TemplateConfig>,
    pub custom_fields: Option<Vec<CustomField>>,
}

impl TemplatePatch {
    pub fn title(value: impl Into<String>) -> Self {
        Self {
            title: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn config(value: TemplateConfig) -> Self {
        Self {
            config: Some(value),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetPatch {
    pub title: Option<String>,
    pub position: Option<usize>,
    pub config: Option<TemplateConfig>,
    pub custom_fields: Option<Vec<CustomField>>,
    pub is_hidden: Option<bool>,
}

impl WidgetPatch {
    pub fn config(value: TemplateConfig) -> Self {
        Self {
            config: Some(value),
            ..Self::default()
        }
    }

    pub fn hidden(value: bool) -> Self {
        Self {
            is_hidden: Some(value),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalPatch {
    pub name: Option<String>,
    pub target_amount: Option<f64>,
    pub current_amount: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub target_date: Option<NaiveDate>,
}

impl GoalPatch {
    pub fn current_amount(value: f64) -> Self {
        Self {
            current_amount: Some(value),
            ..Self::default()
        }
    }
}
