//! Standalone savings goals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::EntityId;

/// A standalone savings target, independent of goal-flavored templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: EntityId,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub start_date: NaiveDate,
    pub target_date: NaiveDate,
}

impl Goal {
    /// Completion ratio in `[0, 1]`, clamped; zero targets count as done.
    pub fn progress(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 1.0;
        }
        (self.current_amount / self.target_amount).clamp(0.0, 1.0)
    }
}
