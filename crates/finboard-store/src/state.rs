//! The root state value.
//!
//! `AppState` owns every entity collection. All mutation goes through the
//! operation methods defined in the per-concern modules of this crate;
//! views read the current snapshot through `&AppState` and the lookup
//! helpers here.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use finboard_model::{
    DashboardWidget, DeletedItem, EntityId, Goal, LibraryFolder, Template, View,
};

/// All entity collections plus the parallel order arrays and the transient
/// selection sets.
///
/// Order arrays (`templates_order`, `goals_order`, `sidebar_order`) define
/// display order as a separate structure rather than an intrinsic field.
/// Entries referring to missing entities are tolerated; entities missing
/// from their order array sort last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    pub templates: Vec<Template>,
    pub library_templates: Vec<Template>,
    pub library_folders: Vec<LibraryFolder>,
    pub dashboard_widgets: Vec<DashboardWidget>,
    pub goals: Vec<Goal>,
    pub favorites: Vec<EntityId>,
    pub deleted_items: Vec<DeletedItem>,
    pub templates_order: Vec<EntityId>,
    pub goals_order: Vec<EntityId>,
    pub sidebar_order: Vec<View>,
    // Selection sets are per-session and reset after each bulk action.
    #[serde(skip)]
    pub selected_templates: BTreeSet<EntityId>,
    #[serde(skip)]
    pub selected_library_items: BTreeSet<EntityId>,
    #[serde(skip)]
    pub selected_trash_items: BTreeSet<EntityId>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            templates: Vec::new(),
            library_templates: Vec::new(),
            library_folders: Vec::new(),
            dashboard_widgets: Vec::new(),
            goals: Vec::new(),
            favorites: Vec::new(),
            deleted_items: Vec::new(),
            templates_order: Vec::new(),
            goals_order: Vec::new(),
            sidebar_order: View::DEFAULT_ORDER.to_vec(),
            selected_templates: BTreeSet::new(),
            selected_library_items: BTreeSet::new(),
            selected_trash_items: BTreeSet::new(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------
    // Lookups
    // -------------------------------------------------------------------

    pub fn template(&self, id: &EntityId) -> Option<&Template> {
        self.templates.iter().find(|t| &t.id == id)
    }

    pub fn library_template(&self, id: &EntityId) -> Option<&Template> {
        self.library_templates.iter().find(|t| &t.id == id)
    }

    pub fn widget(&self, id: &EntityId) -> Option<&DashboardWidget> {
        self.dashboard_widgets.iter().find(|w| &w.id == id)
    }

    pub fn goal(&self, id: &EntityId) -> Option<&Goal> {
        self.goals.iter().find(|g| &g.id == id)
    }

    pub fn folder(&self, id: &EntityId) -> Option<&LibraryFolder> {
        self.library_folders.iter().find(|f| &f.id == id)
    }

    /// The folder currently holding `item_id`, if any. Folder membership
    /// is exclusive, so there is at most one.
    pub fn folder_containing(&self, item_id: &EntityId) -> Option<&LibraryFolder> {
        self.library_folders.iter().find(|f| f.contains(item_id))
    }

    pub fn trash_entry(&self, id: &EntityId) -> Option<&DeletedItem> {
        self.deleted_items.iter().find(|i| &i.id == id)
    }

    pub fn is_favorite(&self, id: &EntityId) -> bool {
        self.favorites.contains(id)
    }

    /// Widgets shown on the main grid (hidden detail-only widgets excluded).
    pub fn visible_widgets(&self) -> impl Iterator<Item = &DashboardWidget> {
        self.dashboard_widgets.iter().filter(|w| !w.is_hidden)
    }

    /// Templates resolved through `templates_order`.
    ///
    /// Dangling order entries are skipped; templates absent from the order
    /// array are appended last in collection order.
    pub fn ordered_templates(&self) -> Vec<&Template> {
        ordered_by(&self.templates, &self.templates_order, |t| &t.id)
    }

    /// Goals resolved through `goals_order`, same tolerance rules as
    /// [`AppState::ordered_templates`].
    pub fn ordered_goals(&self) -> Vec<&Goal> {
        ordered_by(&self.goals, &self.goals_order, |g| &g.id)
    }

    // -------------------------------------------------------------------
    // Sidebar
    // -------------------------------------------------------------------

    /// Replace the sidebar order wholesale with a caller-supplied
    /// permutation.
    pub fn reorder_sidebar(&mut self, order: Vec<View>) {
        self.sidebar_order = order;
    }
}

fn ordered_by<'a, T, F>(items: &'a [T], order: &[EntityId], id_of: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &EntityId,
{
    let mut out: Vec<&T> = Vec::with_capacity(items.len());
    for id in order {
        if let Some(item) = items.iter().find(|item| id_of(item) == id) {
            out.push(item);
        }
    }
    for item in items {
        if !order.contains(id_of(item)) {
            out.push(item);
        }
    }
    out
}
