//! Soft-delete envelopes.
//!
//! Trashed entities are cut from their home collection and parked here as a
//! full value snapshot with deletion/expiry timestamps. Expiry is
//! informational: nothing in this crate sweeps expired entries.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{DashboardWidget, EntityId, Goal, LibraryFolder, ModelError, Template, View};

/// Days a trash entry is retained before it counts as expired.
pub const TRASH_RETENTION_DAYS: i64 = 30;

/// Wire/UI-facing names for the payload kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrashKind {
    Template,
    Widget,
    Goal,
    Folder,
    SidebarItem,
}

impl TrashKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrashKind::Template => "template",
            TrashKind::Widget => "widget",
            TrashKind::Goal => "goal",
            TrashKind::Folder => "folder",
            TrashKind::SidebarItem => "sidebar-item",
        }
    }
}

impl fmt::Display for TrashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrashKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "template" => Ok(TrashKind::Template),
            "widget" => Ok(TrashKind::Widget),
            "goal" => Ok(TrashKind::Goal),
            "folder" => Ok(TrashKind::Folder),
            "sidebar-item" => Ok(TrashKind::SidebarItem),
            other => Err(ModelError::UnknownTrashKind(other.to_string())),
        }
    }
}

/// Snapshot of a trashed entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum TrashPayload {
    Template(Template),
    Widget(DashboardWidget),
    Goal(Goal),
    Folder(LibraryFolder),
    SidebarItem(View),
}

impl TrashPayload {
    pub fn kind(&self) -> TrashKind {
        match self {
            TrashPayload::Template(_) => TrashKind::Template,
            TrashPayload::Widget(_) => TrashKind::Widget,
            TrashPayload::Goal(_) => TrashKind::Goal,
            TrashPayload::Folder(_) => TrashKind::Folder,
            TrashPayload::SidebarItem(_) => TrashKind::SidebarItem,
        }
    }

    /// Id of the snapshotted entity. Sidebar entries have no id of their
    /// own, so the view's wire name stands in.
    pub fn entity_id(&self) -> EntityId {
        match self {
            TrashPayload::Template(t) => t.id.clone(),
            TrashPayload::Widget(w) => w.id.clone(),
            TrashPayload::Goal(g) => g.id.clone(),
            TrashPayload::Folder(f) => f.id.clone(),
            TrashPayload::SidebarItem(view) => EntityId::from_trusted(view.as_str()),
        }
    }
}

/// A trash entry: payload snapshot plus deletion/expiry timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedItem {
    /// Copied from the deleted entity.
    pub id: EntityId,
    #[serde(flatten)]
    pub payload: TrashPayload,
    pub deleted_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl DeletedItem {
    /// Envelope a snapshot; `expires_at` is exactly 30 days after `now`.
    pub fn new(payload: TrashPayload, now: DateTime<Utc>) -> Self {
        Self {
            id: payload.entity_id(),
            payload,
            deleted_at: now,
            expires_at: now + Duration::days(TRASH_RETENTION_DAYS),
        }
    }

    pub fn kind(&self) -> TrashKind {
        self.payload.kind()
    }

    /// Informational only: expired entries are not swept automatically.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
