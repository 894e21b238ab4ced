#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Identifier for any owned entity (template, widget, goal, folder, trash
/// entry).
///
/// Ids are opaque non-empty strings. Freshly created entities get a
/// UUID-backed id via [`EntityId::generate`]; uniqueness is therefore
/// probabilistic, and the store does not re-check it at insert time.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidEntityId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Generate a fresh id, optionally namespaced with a prefix
    /// (`"lib"`, `"folder"`, ...).
    pub fn generate(prefix: Option<&str>) -> Self {
        let unique = uuid::Uuid::new_v4();
        match prefix {
            Some(p) => Self(format!("{p}-{unique}")),
            None => Self(unique.to_string()),
        }
    }

    /// Derive a library-copy id from a source template id.
    ///
    /// The copy carries the source id for readability; the UUID suffix is
    /// what makes it unique.
    pub fn derive_library_id(source: &EntityId) -> Self {
        Self(format!("lib-{}-{}", source.as_str(), uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Construct from a value already known to be non-empty (static wire
    /// names, catalog ids).
    pub(crate) fn from_trusted(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
