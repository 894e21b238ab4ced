//! Domain store for the finboard dashboard core.
//!
//! Owns all entity collections and every state-transition operation:
//! creation, mutation, folder membership, reordering, the trash state
//! machine, and selection/bulk helpers. All operations are total — an
//! unknown id is a no-op, never an error — and run synchronously to
//! completion.
//!
//! Module layout mirrors the operation groups:
//!
//! - [`state`] — `AppState` and read helpers
//! - [`templates`] / [`library`] / [`folders`] / [`dashboard`] / [`goals`]
//!   — per-concern operations as `impl AppState` blocks
//! - [`trash`] — soft delete, restore, cascade purge
//! - [`selection`] — multi-select sets and bulk actions
//! - [`ops`] — the [`StoreOp`] enum and single dispatch point
//! - [`store`] — the [`Store`] container with subscriber notification

pub mod dashboard;
pub mod folders;
pub mod goals;
pub mod library;
pub mod ops;
pub mod patch;
pub mod selection;
pub mod state;
pub mod store;
pub mod templates;
pub mod trash;

pub use ops::StoreOp;
pub use patch::{GoalPatch, TemplatePatch, WidgetPatch};
pub use state::AppState;
pub use store::Store;
pub use trash::RestoreTarget;

#[cfg(test)]
mod tests {
    use super::*;
    use finboard_model::{EntityId, Template, TemplateKind};

    #[test]
    fn state_serde_round_trip_skips_selection() {
        let mut state = AppState::new();
        state.apply(StoreOp::AddTemplate(Template::new(
            EntityId::new("t1").unwrap(),
            "Monthly Budget",
            "",
            TemplateKind::Budget,
        )));
        state.apply(StoreOp::SetSelectedTemplate {
            id: EntityId::new("t1").unwrap(),
            selected: true,
        });

        let json = serde_json::to_string(&state).unwrap();
        let round: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(round.templates, state.templates);
        assert_eq!(round.templates_order, state.templates_order);
        assert!(round.selected_templates.is_empty());
    }
}
