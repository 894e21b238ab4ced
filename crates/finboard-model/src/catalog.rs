//! The built-in template catalog.
//!
//! The templates view renders this full list regardless of what the user
//! has created, and select-all in that view selects against it.

use crate::{EntityId, Template, TemplateKind};

/// The static eleven-entry catalog of selectable templates.
pub fn builtin_templates() -> Vec<Template> {
    CATALOG
        .iter()
        .map(|(id, title, description, kind)| Template {
            id: EntityId::from_trusted(*id),
            title: (*title).to_string(),
            description: (*description).to_string(),
            kind: *kind,
            config: None,
            custom_fields: Vec::new(),
            original_id: None,
        })
        .collect()
}

const CATALOG: [(&str, &str, &str, TemplateKind); 11] = [
    (
        "1",
        "Monthly Budget",
        "Plan your monthly income and expenses",
        TemplateKind::Budget,
    ),
    (
        "2",
        "Emergency Fund",
        "Build savings for unexpected events",
        TemplateKind::Emergency,
    ),
    (
        "3",
        "Holiday Savings",
        "Save up for the trip you have in mind",
        TemplateKind::Holiday,
    ),
    (
        "4",
        "Expense Tracker",
        "Keep an eye on day-to-day spending",
        TemplateKind::ExpenseTracker,
    ),
    (
        "5",
        "Investment Portfolio",
        "Track your investments in one place",
        TemplateKind::Portfolio,
    ),
    (
        "6",
        "Debt Payoff",
        "Manage and pay down your debts",
        TemplateKind::Debt,
    ),
    (
        "7",
        "Budgeting Guide",
        "Budgeting tips and walkthrough",
        TemplateKind::Guide,
    ),
    (
        "8",
        "Investment Basics",
        "Fundamentals of investing",
        TemplateKind::Basics,
    ),
    (
        "9",
        "Retirement Calculator",
        "Plan toward your retirement goals",
        TemplateKind::Retirement,
    ),
    (
        "10",
        "Tax Planning",
        "Plan for tax optimization",
        TemplateKind::Tax,
    ),
    (
        "11",
        "Debt Strategy",
        "Build a multi-debt payoff plan",
        TemplateKind::DebtStrategy,
    ),
];
