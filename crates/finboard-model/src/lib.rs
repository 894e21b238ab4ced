//! Entity model for the finboard dashboard core.
//!
//! Pure data definitions: ids, template kinds, the per-kind configuration
//! union, the entities themselves, the built-in catalog, and the trash
//! envelope. State transitions live in `finboard-store`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod folder;
pub mod goal;
pub mod ids;
pub mod kind;
pub mod template;
pub mod trash;
pub mod widget;

pub use config::{
    AssetEntry, BudgetLine, CashFlow, CategoryDef, ChecklistStep, DebtEntry, Installment,
    Recurrence, RecurrencePeriod, TemplateConfig, TransactionEntry,
};
pub use error::{ModelError, Result};
pub use folder::LibraryFolder;
pub use goal::Goal;
pub use ids::EntityId;
pub use kind::{TemplateKind, View};
pub use template::{CustomField, Template};
pub use trash::{DeletedItem, TRASH_RETENTION_DAYS, TrashKind, TrashPayload};
pub use widget::DashboardWidget;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_serializes_camel_case() {
        let template = Template::new(
            EntityId::new("t1").unwrap(),
            "Monthly Budget",
            "Plan income and expenses",
            TemplateKind::Budget,
        );
        let json = serde_json::to_value(&template).unwrap();
        assert_eq!(json["kind"], "budget");
        assert!(json.get("originalId").is_none());

        let copy = template.library_copy();
        let json = serde_json::to_value(&copy).unwrap();
        assert_eq!(json["originalId"], "t1");
    }
}
