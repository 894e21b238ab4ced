//! Type-safe enumerations for template kinds and sidebar views.
//!
//! Both enums use snake_case (kinds) / kebab-case (views) wire names so a
//! serialized state document matches what the dashboard UI renders.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// The eleven built-in template families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// Monthly income/expense budget.
    Budget,
    /// Emergency fund build-up.
    Emergency,
    /// Holiday savings target.
    Holiday,
    /// Day-to-day expense tracker.
    ExpenseTracker,
    /// Investment portfolio overview.
    Portfolio,
    /// Single-debt payoff tracker.
    Debt,
    /// Budgeting guide (checklist content).
    Guide,
    /// Investment basics (checklist content).
    Basics,
    /// Retirement calculator.
    Retirement,
    /// Tax planning notes.
    Tax,
    /// Multi-debt payoff strategy.
    DebtStrategy,
}

impl TemplateKind {
    /// Canonical wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Budget => "budget",
            TemplateKind::Emergency => "emergency",
            TemplateKind::Holiday => "holiday",
            TemplateKind::ExpenseTracker => "expense_tracker",
            TemplateKind::Portfolio => "portfolio",
            TemplateKind::Debt => "debt",
            TemplateKind::Guide => "guide",
            TemplateKind::Basics => "basics",
            TemplateKind::Retirement => "retirement",
            TemplateKind::Tax => "tax",
            TemplateKind::DebtStrategy => "debt_strategy",
        }
    }

    pub const ALL: [TemplateKind; 11] = [
        TemplateKind::Budget,
        TemplateKind::Emergency,
        TemplateKind::Holiday,
        TemplateKind::ExpenseTracker,
        TemplateKind::Portfolio,
        TemplateKind::Debt,
        TemplateKind::Guide,
        TemplateKind::Basics,
        TemplateKind::Retirement,
        TemplateKind::Tax,
        TemplateKind::DebtStrategy,
    ];
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "budget" => Ok(TemplateKind::Budget),
            "emergency" => Ok(TemplateKind::Emergency),
            "holiday" => Ok(TemplateKind::Holiday),
            "expense_tracker" => Ok(TemplateKind::ExpenseTracker),
            "portfolio" => Ok(TemplateKind::Portfolio),
            "debt" => Ok(TemplateKind::Debt),
            "guide" => Ok(TemplateKind::Guide),
            "basics" => Ok(TemplateKind::Basics),
            "retirement" => Ok(TemplateKind::Retirement),
            "tax" => Ok(TemplateKind::Tax),
            "debt_strategy" => Ok(TemplateKind::DebtStrategy),
            other => Err(ModelError::UnknownTemplateKind(other.to_string())),
        }
    }
}

/// Sidebar destinations, in default display order.
///
/// `View` doubles as the element type of the sidebar order array and as the
/// trash payload for a removed sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Overview,
    Templates,
    Library,
    Goals,
    Favorites,
    Trash,
    Settings,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Overview => "overview",
            View::Templates => "templates",
            View::Library => "library",
            View::Goals => "goals",
            View::Favorites => "favorites",
            View::Trash => "trash",
            View::Settings => "settings",
        }
    }

    /// Default sidebar ordering for a fresh state.
    pub const DEFAULT_ORDER: [View; 7] = [
        View::Overview,
        View::Templates,
        View::Library,
        View::Goals,
        View::Favorites,
        View::Trash,
        View::Settings,
    ];
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overview" => Ok(View::Overview),
            "templates" => Ok(View::Templates),
            "library" => Ok(View::Library),
            "goals" => Ok(View::Goals),
            "favorites" => Ok(View::Favorites),
            "trash" => Ok(View::Trash),
            "settings" => Ok(View::Settings),
            other => Err(ModelError::UnknownView(other.to_string())),
        }
    }
}
