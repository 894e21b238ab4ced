//! Per-kind template configuration.
//!
//! The configuration is a tagged union keyed by template kind: each variant
//! carries only the fields that kind actually renders and edits. Scalar
//! fields stay optional because the template builder lets users skip them;
//! row collections default to empty.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{EntityId, TemplateKind};

/// Direction of a budget line or transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashFlow {
    Income,
    Expense,
}

/// One line of a monthly budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLine {
    pub id: EntityId,
    pub name: String,
    pub amount: f64,
    pub flow: CashFlow,
}

/// Repetition period for recurring and installment entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrencePeriod {
    Day,
    Week,
    Month,
    Year,
}

/// Recurring-transaction descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recurrence {
    pub interval: u32,
    pub period: RecurrencePeriod,
    /// Open-ended when absent.
    pub until: Option<NaiveDate>,
}

/// Installment-plan descriptor (N payments, one per period).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    pub count: u32,
    pub period: RecurrencePeriod,
}

/// A single tracked transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEntry {
    pub id: EntityId,
    pub date: NaiveDate,
    pub amount: f64,
    pub description: String,
    pub flow: CashFlow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment: Option<Installment>,
}

/// A portfolio holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetEntry {
    pub id: EntityId,
    pub name: String,
    pub value: f64,
    pub asset_class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A tracked debt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtEntry {
    pub id: EntityId,
    pub name: String,
    pub amount: f64,
    pub interest_rate: f64,
    pub min_payment: f64,
}

/// One step of a guide/basics checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistStep {
    pub id: EntityId,
    pub title: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// User-defined transaction category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDef {
    pub value: String,
    pub label: String,
    pub color: String,
}

/// Kind-specific template configuration.
///
/// Serialized internally tagged on `kind`, so a config document carries the
/// same discriminant string as the owning template's `kind` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TemplateConfig {
    Budget {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        monthly_income: Option<f64>,
        #[serde(default)]
        items: Vec<BudgetLine>,
    },
    Emergency {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target_amount: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        current_amount: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        monthly_savings: Option<f64>,
    },
    Holiday {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target_amount: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        current_amount: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target_date: Option<NaiveDate>,
    },
    ExpenseTracker {
        #[serde(default)]
        transactions: Vec<TransactionEntry>,
        #[serde(default)]
        categories: Vec<CategoryDef>,
    },
    Portfolio {
        #[serde(default)]
        assets: Vec<AssetEntry>,
    },
    Debt {
        #[serde(default)]
        debts: Vec<DebtEntry>,
    },
    Guide {
        #[serde(default)]
        steps: Vec<ChecklistStep>,
    },
    Basics {
        #[serde(default)]
        steps: Vec<ChecklistStep>,
    },
    Retirement {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        age: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target_age: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        monthly_savings: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        current_amount: Option<f64>,
    },
    Tax {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        amount: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
    DebtStrategy {
        #[serde(default)]
        debts: Vec<DebtEntry>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        monthly_budget: Option<f64>,
    },
}

impl TemplateConfig {
    /// The template kind this variant belongs to.
    pub fn kind(&self) -> TemplateKind {
        match self {
            TemplateConfig::Budget { .. } => TemplateKind::Budget,
            TemplateConfig::Emergency { .. } => TemplateKind::Emergency,
            TemplateConfig::Holiday { .. } => TemplateKind::Holiday,
            TemplateConfig::ExpenseTracker { .. } => TemplateKind::ExpenseTracker,
            TemplateConfig::Portfolio { .. } => TemplateKind::Portfolio,
            TemplateConfig::Debt { .. } => TemplateKind::Debt,
            TemplateConfig::Guide { .. } => TemplateKind::Guide,
            TemplateConfig::Basics { .. } => TemplateKind::Basics,
            TemplateConfig::Retirement { .. } => TemplateKind::Retirement,
            TemplateConfig::Tax { .. } => TemplateKind::Tax,
            TemplateConfig::DebtStrategy { .. } => TemplateKind::DebtStrategy,
        }
    }

    /// Empty configuration for a kind, used when instantiating a catalog
    /// template without going through the builder.
    pub fn empty_for(kind: TemplateKind) -> Self {
        match kind {
            TemplateKind::Budget => TemplateConfig::Budget {
                monthly_income: None,
                items: Vec::new(),
            },
            TemplateKind::Emergency => TemplateConfig::Emergency {
                target_amount: None,
                current_amount: None,
                monthly_savings: None,
            },
            TemplateKind::Holiday => TemplateConfig::Holiday {
                target_amount: None,
                current_amount: None,
                target_date: None,
            },
            TemplateKind::ExpenseTracker => TemplateConfig::ExpenseTracker {
                transactions: Vec::new(),
                categories: Vec::new(),
            },
            TemplateKind::Portfolio => TemplateConfig::Portfolio { assets: Vec::new() },
            TemplateKind::Debt => TemplateConfig::Debt { debts: Vec::new() },
            TemplateKind::Guide => TemplateConfig::Guide { steps: Vec::new() },
            TemplateKind::Basics => TemplateConfig::Basics { steps: Vec::new() },
            TemplateKind::Retirement => TemplateConfig::Retirement {
                age: None,
                target_age: None,
                monthly_savings: None,
                current_amount: None,
            },
            TemplateKind::Tax => TemplateConfig::Tax {
                amount: None,
                notes: None,
            },
            TemplateKind::DebtStrategy => TemplateConfig::DebtStrategy {
                debts: Vec::new(),
                monthly_budget: None,
            },
        }
    }
}
