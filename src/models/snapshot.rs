//! Group snapshot model
//!
//! A fully materialized view of one group: its members and every expense with
//! payments and shares. This is the unit the balance calculator works on.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::expense::Expense;
use super::member::{Group, Member};
use crate::error::{SplitError, SplitResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSnapshot {
    pub group: Group,

    #[serde(default)]
    pub members: Vec<Member>,

    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl GroupSnapshot {
    pub fn new(group: Group, members: Vec<Member>, expenses: Vec<Expense>) -> Self {
        Self {
            group,
            members,
            expenses,
        }
    }

    /// Sum of all expense totals
    pub fn total_expenses(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Check referential integrity and per-expense consistency
    ///
    /// The balance calculator tolerates snapshots that fail this check; this
    /// is for callers that would rather reject them.
    pub fn validate(&self) -> SplitResult<()> {
        let mut seen = HashSet::new();
        for member in &self.members {
            if !seen.insert(member.id) {
                return Err(SplitError::Validation(format!(
                    "Member {} appears more than once in group '{}'",
                    member.id, self.group.name
                )));
            }
        }

        for expense in &self.expenses {
            expense.validate().map_err(|e| {
                SplitError::Validation(format!("Expense '{}': {}", expense.title, e))
            })?;

            if let Some(stranger) = expense.member_ids().find(|id| !seen.contains(id)) {
                return Err(SplitError::member_not_found(format!(
                    "{} (referenced by expense '{}')",
                    stranger.as_uuid(), expense.title
                )));
            }
        }

        Ok(())
    }
}
