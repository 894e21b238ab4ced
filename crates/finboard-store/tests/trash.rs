//! Trash state machine tests: round trips, restore targets, cascade purge.

use chrono::{Duration, Utc};

use finboard_model::{
    DashboardWidget, EntityId, Goal, LibraryFolder, Template, TemplateKind, TrashKind,
    TrashPayload, View,
};
use finboard_store::{AppState, RestoreTarget, StoreOp};

fn id(value: &str) -> EntityId {
    EntityId::new(value).unwrap()
}

fn template(tid: &str) -> Template {
    Template::new(id(tid), format!("Template {tid}"), "", TemplateKind::Budget)
}

fn goal(gid: &str) -> Goal {
    Goal {
        id: id(gid),
        name: format!("Goal {gid}"),
        target_amount: 1000.0,
        current_amount: 250.0,
        start_date: chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        target_date: chrono::NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
    }
}

#[test]
fn goal_trash_cut_and_expiry() {
    let mut state = AppState::new();
    state.add_goal(goal("g1"));
    let now = Utc::now();

    state.move_to_trash_at(TrashPayload::Goal(goal("g1")), now);

    assert!(state.goals.is_empty());
    assert_eq!(state.deleted_items.len(), 1);
    let entry = &state.deleted_items[0];
    assert_eq!(entry.kind(), TrashKind::Goal);
    assert_eq!(entry.deleted_at, now);
    assert_eq!(entry.expires_at, now + Duration::days(30));
    // The order array keeps its dangling entry; reads tolerate it.
    assert_eq!(state.goals_order, vec![id("g1")]);
    assert!(state.ordered_goals().is_empty());
}

#[test]
fn goal_trash_round_trip() {
    let mut state = AppState::new();
    state.add_goal(goal("g1"));
    state.move_to_trash(TrashPayload::Goal(goal("g1")));

    state.restore_from_trash(&id("g1"), RestoreTarget::Templates);

    assert_eq!(state.goals.len(), 1);
    assert!(state.deleted_items.is_empty());
    // No duplicate order entry from the restore.
    assert_eq!(state.goals_order, vec![id("g1")]);
}

#[test]
fn template_restores_to_templates_by_default_or_library_on_request() {
    let mut state = AppState::new();
    state.add_template(template("t1"));
    state.move_to_trash(TrashPayload::Template(template("t1")));
    assert!(state.templates.is_empty());

    state.restore_from_trash(&id("t1"), RestoreTarget::Templates);
    assert_eq!(state.templates.len(), 1);
    assert!(state.deleted_items.is_empty());

    state.move_to_trash(TrashPayload::Template(template("t1")));
    state.restore_from_trash(&id("t1"), RestoreTarget::Library);
    assert!(state.templates.is_empty());
    assert_eq!(state.library_templates.len(), 1);
}

#[test]
fn trashing_a_template_strips_it_from_favorites() {
    let mut state = AppState::new();
    state.add_template(template("t1"));
    state.toggle_favorite(&id("t1"));

    state.move_to_trash(TrashPayload::Template(template("t1")));

    assert!(state.favorites.is_empty());
}

#[test]
fn widget_trash_round_trip() {
    let mut state = AppState::new();
    state.add_template(template("t1"));
    let source = state.template(&id("t1")).unwrap().clone();
    state.add_to_dashboard(&source);
    let widget = state.dashboard_widgets[0].clone();

    state.move_to_trash(TrashPayload::Widget(widget.clone()));
    assert!(state.dashboard_widgets.is_empty());

    state.restore_from_trash(&widget.id, RestoreTarget::Templates);
    assert_eq!(state.dashboard_widgets, vec![widget]);
    assert!(state.deleted_items.is_empty());
}

#[test]
fn folder_trash_cuts_and_restores() {
    let mut state = AppState::new();
    state.create_folder("Planning");
    let folder = state.library_folders[0].clone();

    state.move_to_trash(TrashPayload::Folder(folder.clone()));
    assert!(state.library_folders.is_empty());
    assert_eq!(state.deleted_items[0].kind(), TrashKind::Folder);

    state.restore_from_trash(&folder.id, RestoreTarget::Templates);
    assert_eq!(state.library_folders, vec![folder]);
}

#[test]
fn restored_folder_drops_items_claimed_by_other_folders() {
    let mut state = AppState::new();
    let trashed = LibraryFolder {
        id: id("f1"),
        name: "Old".to_string(),
        item_ids: vec![id("lib-a"), id("lib-b")],
    };
    state.library_folders = vec![trashed.clone()];
    state.move_to_trash(TrashPayload::Folder(trashed));

    // While f1 sat in the trash, lib-a moved into another folder.
    state.create_folder("New");
    let new_folder = state.library_folders[0].id.clone();
    state.move_into_folder(&id("lib-a"), Some(&new_folder));

    state.restore_from_trash(&id("f1"), RestoreTarget::Templates);

    let restored = state.folder(&id("f1")).unwrap();
    assert_eq!(restored.item_ids, vec![id("lib-b")]);
}

#[test]
fn sidebar_item_trash_cuts_and_restores_the_view() {
    let mut state = AppState::new();
    state.move_to_trash(TrashPayload::SidebarItem(View::Favorites));
    assert!(!state.sidebar_order.contains(&View::Favorites));

    state.restore_from_trash(&id("favorites"), RestoreTarget::Templates);
    assert!(state.sidebar_order.contains(&View::Favorites));
    // Restore appends rather than restoring the original slot.
    assert_eq!(state.sidebar_order.last(), Some(&View::Favorites));
}

#[test]
fn purge_cascade_is_complete() {
    let mut state = AppState::new();
    state.add_template(template("t1"));
    let source = state.template(&id("t1")).unwrap().clone();
    state.add_to_dashboard(&source);
    state.add_to_library(&source);
    state.toggle_favorite(&id("t1"));
    state.create_folder("Planning");
    let folder_id = state.library_folders[0].id.clone();
    state.move_into_folder(&id("t1"), Some(&folder_id));

    state.move_to_trash(TrashPayload::Template(source));
    state.permanent_delete(&id("t1"));

    assert!(state.templates.is_empty());
    assert!(state.templates_order.is_empty());
    assert!(state.dashboard_widgets.is_empty(), "widget left dangling");
    assert!(
        state.library_templates.is_empty(),
        "library copy left dangling"
    );
    assert!(state.favorites.is_empty());
    assert!(state.deleted_items.is_empty());
    assert!(state.folder(&folder_id).unwrap().item_ids.is_empty());
}

#[test]
fn permanent_delete_selected_applies_per_kind_cascades() {
    let mut state = AppState::new();
    state.add_template(template("d1"));
    let source = state.template(&id("d1")).unwrap().clone();
    state.add_to_dashboard(&source);
    let widget = state.dashboard_widgets[0].clone();

    state.move_to_trash(TrashPayload::Template(source));
    state.move_to_trash(TrashPayload::Widget(widget.clone()));
    state.set_selected_trash_item(&id("d1"), true);
    state.set_selected_trash_item(&widget.id, true);

    state.permanent_delete_selected();

    assert!(state.deleted_items.is_empty());
    assert!(state.templates.is_empty());
    assert!(state.dashboard_widgets.is_empty());
    assert!(state.selected_trash_items.is_empty());
}

#[test]
fn empty_trash_cascades_every_entry() {
    let mut state = AppState::new();
    state.add_template(template("t1"));
    let source = state.template(&id("t1")).unwrap().clone();
    state.add_to_dashboard(&source);
    state.add_goal(goal("g1"));

    state.move_to_trash(TrashPayload::Template(source));
    state.move_to_trash(TrashPayload::Goal(goal("g1")));

    state.empty_trash();

    assert!(state.deleted_items.is_empty());
    assert!(state.templates.is_empty());
    assert!(state.dashboard_widgets.is_empty());
    assert!(state.goals.is_empty());
    assert!(state.goals_order.is_empty());
}

#[test]
fn restore_selected_clears_the_selection() {
    let mut state = AppState::new();
    state.add_goal(goal("g1"));
    state.add_goal(goal("g2"));
    state.move_to_trash(TrashPayload::Goal(goal("g1")));
    state.move_to_trash(TrashPayload::Goal(goal("g2")));
    state.select_all_trash_items(true);

    state.restore_selected_from_trash(RestoreTarget::Templates);

    assert_eq!(state.goals.len(), 2);
    assert!(state.deleted_items.is_empty());
    assert!(state.selected_trash_items.is_empty());
}

#[test]
fn restore_all_empties_the_trash() {
    let mut state = AppState::new();
    state.add_goal(goal("g1"));
    state.add_template(template("t1"));
    state.move_to_trash(TrashPayload::Goal(goal("g1")));
    state.move_to_trash(TrashPayload::Template(template("t1")));

    state.restore_all_from_trash(RestoreTarget::Templates);

    assert!(state.deleted_items.is_empty());
    assert_eq!(state.goals.len(), 1);
    assert_eq!(state.templates.len(), 1);
}

#[test]
fn unknown_ids_are_no_ops() {
    let mut state = AppState::new();
    state.add_goal(goal("g1"));
    let before = state.clone();

    state.restore_from_trash(&id("nope"), RestoreTarget::Templates);
    state.permanent_delete(&id("nope"));
    state.apply(StoreOp::UpdateGoal {
        id: id("nope"),
        patch: finboard_store::GoalPatch::current_amount(10.0),
    });

    assert_eq!(state, before);
}

#[test]
fn restore_round_trip_preserves_the_snapshot_among_unrelated_entities() {
    let mut state = AppState::new();
    for n in 0..5 {
        state.add_template(template(&format!("other-{n}")));
        state.add_goal(goal(&format!("go-{n}")));
    }
    let mut subject = template("t-subject");
    subject.description = "kept through the round trip".to_string();
    state.add_template(subject.clone());

    state.move_to_trash(TrashPayload::Template(subject.clone()));
    state.restore_from_trash(&subject.id, RestoreTarget::Templates);

    assert_eq!(state.template(&subject.id), Some(&subject));
    assert!(state.deleted_items.is_empty());
    assert_eq!(state.templates.len(), 6);
    assert_eq!(state.goals.len(), 5);
}

#[test]
fn widget_kind_mismatch_does_not_touch_other_collections() {
    let mut state = AppState::new();
    state.add_template(template("t1"));
    let source = state.template(&id("t1")).unwrap().clone();
    state.add_to_dashboard(&source);
    let widget: DashboardWidget = state.dashboard_widgets[0].clone();

    state.move_to_trash(TrashPayload::Widget(widget));

    assert_eq!(state.templates.len(), 1);
    assert_eq!(state.templates_order.len(), 1);
}
