//! Goal operations.

use finboard_model::{EntityId, Goal};

use crate::AppState;
use crate::patch::GoalPatch;

impl AppState {
    /// Append a goal and its id to the order array.
    pub fn add_goal(&mut self, goal: Goal) {
        self.goals_order.push(goal.id.clone());
        self.goals.push(goal);
    }

    /// Shallow-merge `patch` into the matching goal. No-op if the id is
    /// unknown.
    pub fn update_goal(&mut self, id: &EntityId, patch: GoalPatch) {
        let Some(goal) = self.goals.iter_mut().find(|g| &g.id == id) else {
            return;
        };
        if let Some(name) = patch.name {
            goal.name = name;
        }
        if let Some(target_amount) = patch.target_amount {
            goal.target_amount = target_amount;
        }
        if let Some(current_amount) = patch.current_amount {
            goal.current_amount = current_amount;
        }
        if let Some(start_date) = patch.start_date {
            goal.start_date = start_date;
        }
        if let Some(target_date) = patch.target_date {
            goal.target_date = target_date;
        }
    }

    /// Replace the goal order wholesale with a caller-supplied permutation.
    pub fn reorder_goals(&mut self, order: Vec<EntityId>) {
        self.goals_order = order;
    }
}
