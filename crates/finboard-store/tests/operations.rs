//! Creation, mutation, and reorder operation tests.

use finboard_model::{
    BudgetLine, CashFlow, EntityId, Goal, Template, TemplateConfig, TemplateKind,
};
use finboard_store::{AppState, GoalPatch, StoreOp, WidgetPatch};

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
        current_amount: 0.0,
        start_date: chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        target_date: chrono::NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
    }
}

#[test]
fn add_template_prepends_entity_and_order_entry() {
    let mut state = AppState::new();
    state.add_template(template("t1"));
    state.add_template(template("t2"));

    assert_eq!(state.templates[0].id, id("t2"));
    assert_eq!(state.templates_order, vec![id("t2"), id("t1")]);
}

#[test]
fn add_to_dashboard_appends_with_running_position() {
    let mut state = AppState::new();
    state.add_template(template("t1"));
    let source = state.template(&id("t1")).unwrap().clone();

    state.add_to_dashboard(&source);
    state.add_to_dashboard(&source);

    assert_eq!(state.dashboard_widgets.len(), 2);
    assert_eq!(state.dashboard_widgets[0].template_id, id("t1"));
    assert_eq!(state.dashboard_widgets[0].position, 0);
    assert_eq!(state.dashboard_widgets[1].position, 1);
    assert_ne!(state.dashboard_widgets[0].id, state.dashboard_widgets[1].id);
}

#[test]
fn widget_patch_merges_shallowly() {
    let mut state = AppState::new();
    state.add_template(template("t1"));
    let source = state.template(&id("t1")).unwrap().clone();
    state.add_to_dashboard(&source);
    let widget_id = state.dashboard_widgets[0].id.clone();

    state.update_widget(&widget_id, WidgetPatch::hidden(true));

    let widget = state.widget(&widget_id).unwrap();
    assert!(widget.is_hidden);
    // Sibling fields survive the patch.
    assert_eq!(widget.title, "Template t1");
    assert_eq!(widget.position, 0);
    assert_eq!(state.visible_widgets().count(), 0);
}

#[test]
fn widget_patch_replaces_config_wholesale() {
    let mut state = AppState::new();
    state.add_template(
        template("t1").with_config(TemplateConfig::Budget {
            monthly_income: Some(4000.0),
            items: Vec::new(),
        }),
    );
    let source = state.template(&id("t1")).unwrap().clone();
    state.add_to_dashboard(&source);
    let widget_id = state.dashboard_widgets[0].id.clone();

    let next = TemplateConfig::Budget {
        monthly_income: Some(4000.0),
        items: vec![BudgetLine {
            id: id("b1"),
            name: "Rent".to_string(),
            amount: 1500.0,
            flow: CashFlow::Expense,
        }],
    };
    state.update_widget(&widget_id, WidgetPatch::config(next.clone()));

    assert_eq!(state.widget(&widget_id).unwrap().config.as_ref(), Some(&next));
    // The source template keeps its own config.
    assert_eq!(
        state.template(&id("t1")).unwrap().config,
        Some(TemplateConfig::Budget {
            monthly_income: Some(4000.0),
            items: Vec::new(),
        })
    );
}

#[test]
fn goal_patch_merges_shallowly() {
    let mut state = AppState::new();
    state.add_goal(goal("g1"));

    state.update_goal(&id("g1"), GoalPatch::current_amount(400.0));

    let patched = state.goal(&id("g1")).unwrap();
    assert_eq!(patched.current_amount, 400.0);
    assert_eq!(patched.target_amount, 1000.0);
    assert_eq!(patched.name, "Goal g1");
}

#[test]
fn reorders_replace_wholesale() {
    let mut state = AppState::new();
    state.add_goal(goal("g1"));
    state.add_goal(goal("g2"));
    state.apply(StoreOp::ReorderGoals(vec![id("g2"), id("g1")]));
    assert_eq!(state.goals_order, vec![id("g2"), id("g1")]);
    let ordered: Vec<&str> = state.ordered_goals().iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ordered, ["g2", "g1"]);
}

#[test]
fn toggle_favorite_flips_membership() {
    let mut state = AppState::new();
    state.toggle_favorite(&id("t1"));
    assert!(state.is_favorite(&id("t1")));
    state.toggle_favorite(&id("t1"));
    assert!(!state.is_favorite(&id("t1")));

    state.toggle_favorite(&id("t2"));
    state.remove_from_favorites(&id("t2"));
    assert!(!state.is_favorite(&id("t2")));
}

#[test]
fn remove_from_dashboard_drops_only_the_widget() {
    let mut state = AppState::new();
    state.add_template(template("t1"));
    let source = state.template(&id("t1")).unwrap().clone();
    state.add_to_dashboard(&source);
    state.add_to_dashboard(&source);
    let first = state.dashboard_widgets[0].id.clone();

    state.remove_from_dashboard(&first);

    assert_eq!(state.dashboard_widgets.len(), 1);
    assert_eq!(state.templates.len(), 1);
}
