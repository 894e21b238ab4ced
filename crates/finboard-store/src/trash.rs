//! The trash subsystem.
//!
//! Per-entity lifecycle: `Active` (home collection) → `Trashed` (snapshot
//! in `deleted_items`, cut from home) → back to `Active` (restored) or
//! `Purged` (gone everywhere). Trashing is a cut, not a copy; permanent
//! deletion cascades to every dependent entity so no widget, library copy,
//! favorite, or folder entry is left referencing a purged template.
//!
//! Entries expire 30 days after deletion, but expiry is informational:
//! there is no automatic sweep.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use finboard_model::{DeletedItem, EntityId, TrashPayload};

use crate::AppState;

/// Which collection a trashed template is restored into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestoreTarget {
    #[default]
    Templates,
    Library,
}

impl AppState {
    /// Envelope `payload` into the trash and cut the entity from its home
    /// collection. Timestamps come from the wall clock; see
    /// [`AppState::move_to_trash_at`] for the deterministic form.
    pub fn move_to_trash(&mut self, payload: TrashPayload) {
        self.move_to_trash_at(payload, Utc::now());
    }

    /// [`AppState::move_to_trash`] with an explicit deletion instant.
    pub fn move_to_trash_at(&mut self, payload: TrashPayload, now: DateTime<Utc>) {
        let entry = DeletedItem::new(payload, now);
        debug!(id = %entry.id, kind = %entry.kind(), "move to trash");

        match &entry.payload {
            TrashPayload::Template(t) => {
                // A template lives in exactly one of the two collections;
                // cutting from both covers either origin. Order arrays keep
                // their dangling entries (tolerated by the read helpers).
                let id = t.id.clone();
                self.templates.retain(|t| t.id != id);
                self.library_templates.retain(|t| t.id != id);
                self.favorites.retain(|f| *f != id);
            }
            TrashPayload::Widget(w) => {
                let id = w.id.clone();
                self.dashboard_widgets.retain(|w| w.id != id);
            }
            TrashPayload::Goal(g) => {
                let id = g.id.clone();
                self.goals.retain(|g| g.id != id);
            }
            TrashPayload::Folder(f) => {
                let id = f.id.clone();
                self.library_folders.retain(|f| f.id != id);
            }
            TrashPayload::SidebarItem(view) => {
                self.sidebar_order.retain(|v| v != view);
            }
        }

        self.deleted_items.push(entry);
    }

    /// Re-insert a trashed snapshot into a live collection and drop the
    /// trash entry. `target` only matters for templates. No-op if the id
    /// is not in the trash.
    pub fn restore_from_trash(&mut self, id: &EntityId, target: RestoreTarget) {
        let Some(pos) = self.deleted_items.iter().position(|i| &i.id == id) else {
            return;
        };
        let entry = self.deleted_items.remove(pos);
        self.selected_trash_items.remove(id);

        match entry.payload {
            TrashPayload::Template(template) => match target {
                RestoreTarget::Library => self.library_templates.push(template),
                RestoreTarget::Templates => {
                    if !self.templates_order.contains(&template.id) {
                        self.templates_order.push(template.id.clone());
                    }
                    self.templates.push(template);
                }
            },
            TrashPayload::Widget(widget) => self.dashboard_widgets.push(widget),
            TrashPayload::Goal(goal) => {
                if !self.goals_order.contains(&goal.id) {
                    self.goals_order.push(goal.id.clone());
                }
                self.goals.push(goal);
            }
            TrashPayload::Folder(mut folder) => {
                // Items may have been re-foldered while this folder sat in
                // the trash; membership stays exclusive.
                folder
                    .item_ids
                    .retain(|id| self.folder_containing(id).is_none());
                self.library_folders.push(folder);
            }
            TrashPayload::SidebarItem(view) => {
                if !self.sidebar_order.contains(&view) {
                    self.sidebar_order.push(view);
                }
            }
        }
    }

    /// Restore every currently selected trash entry, then clear the
    /// selection.
    pub fn restore_selected_from_trash(&mut self, target: RestoreTarget) {
        let ids: Vec<EntityId> = self.selected_trash_items.iter().cloned().collect();
        for id in &ids {
            self.restore_from_trash(id, target);
        }
        self.selected_trash_items.clear();
    }

    /// Restore everything in the trash.
    pub fn restore_all_from_trash(&mut self, target: RestoreTarget) {
        let ids: Vec<EntityId> = self.deleted_items.iter().map(|i| i.id.clone()).collect();
        for id in &ids {
            self.restore_from_trash(id, target);
        }
    }

    /// Drop a trash entry and purge all dependent state.
    pub fn permanent_delete(&mut self, id: &EntityId) {
        let Some(pos) = self.deleted_items.iter().position(|i| &i.id == id) else {
            return;
        };
        let entry = self.deleted_items.remove(pos);
        self.selected_trash_items.remove(id);
        debug!(id = %entry.id, kind = %entry.kind(), "permanent delete");
        self.purge_cascade(&entry);
    }

    /// Permanently delete every currently selected trash entry, then clear
    /// the selection.
    pub fn permanent_delete_selected(&mut self) {
        let ids: Vec<EntityId> = self.selected_trash_items.iter().cloned().collect();
        for id in &ids {
            self.permanent_delete(id);
        }
        self.selected_trash_items.clear();
    }

    /// Purge every trash entry (same cascade as a one-by-one permanent
    /// delete) and clear the trash selection.
    pub fn empty_trash(&mut self) {
        let entries = std::mem::take(&mut self.deleted_items);
        for entry in &entries {
            self.purge_cascade(entry);
        }
        self.selected_trash_items.clear();
    }

    /// Replace the trash list wholesale with a caller-supplied permutation.
    pub fn reorder_deleted_items(&mut self, items: Vec<DeletedItem>) {
        self.deleted_items = items;
    }

    /// Remove everything that still references a purged entity.
    ///
    /// For templates this is the correctness-critical part: widgets
    /// instantiated from the template, library copies (by id or
    /// `original_id`), favorites, order entries, and folder memberships
    /// all go, or the UI would render ghost cards against a deleted
    /// template.
    fn purge_cascade(&mut self, entry: &DeletedItem) {
        match &entry.payload {
            TrashPayload::Template(t) => {
                let id = t.id.clone();
                self.templates.retain(|t| t.id != id);
                self.templates_order.retain(|tid| *tid != id);
                self.dashboard_widgets.retain(|w| w.template_id != id);
                self.library_templates
                    .retain(|t| t.id != id && t.original_id.as_ref() != Some(&id));
                self.favorites.retain(|f| *f != id);
                for folder in &mut self.library_folders {
                    folder.item_ids.retain(|iid| *iid != id);
                }
            }
            TrashPayload::Widget(w) => {
                let id = w.id.clone();
                self.dashboard_widgets.retain(|w| w.id != id);
            }
            TrashPayload::Goal(g) => {
                let id = g.id.clone();
                self.goals.retain(|g| g.id != id);
                self.goals_order.retain(|gid| *gid != id);
            }
            // Folders and sidebar entries were already cut from their home
            // collection when trashed; dropping the envelope is enough.
            TrashPayload::Folder(_) | TrashPayload::SidebarItem(_) => {}
        }
    }
}
