//! Group snapshot loading
//!
//! A snapshot file holds one group's members and expenses, as JSON or YAML
//! depending on the file extension. An expense may list `split_between`
//! requests instead of explicit `shares`; those are expanded with
//! [`ShareBuilder`] according to the expense's split type.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::file_io::{read_json_required, read_yaml_required};
use crate::error::{SplitError, SplitResult};
use crate::models::{Expense, Group, GroupSnapshot, Member};
use crate::services::{ShareBuilder, ShareRequest};

/// Snapshot file formats, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> SplitResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(SplitError::Snapshot(format!(
                "Unsupported snapshot format for {} (expected .json, .yaml or .yml)",
                path.display()
            ))),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SnapshotDocument {
    group: Group,
    #[serde(default)]
    members: Vec<Member>,
    #[serde(default)]
    expenses: Vec<ExpenseDocument>,
}

#[derive(Debug, Deserialize)]
struct ExpenseDocument {
    #[serde(flatten)]
    expense: Expense,
    #[serde(default)]
    split_between: Vec<ShareRequest>,
}

impl ExpenseDocument {
    fn into_expense(self) -> SplitResult<Expense> {
        let mut expense = self.expense;
        if self.split_between.is_empty() {
            return Ok(expense);
        }
        if !expense.shares.is_empty() {
            return Err(SplitError::Snapshot(format!(
                "Expense '{}' lists both shares and split_between",
                expense.title
            )));
        }

        let title = &expense.title;
        expense.shares =
            ShareBuilder::build(expense.amount, expense.split_type, &self.split_between)
                .map_err(|e| SplitError::Snapshot(format!("Expense '{}': {}", title, e)))?;
        debug!(
            expense = %expense.id,
            shares = expense.shares.len(),
            "built shares from split_between"
        );
        Ok(expense)
    }
}

/// Load a group snapshot from a JSON or YAML file
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> SplitResult<GroupSnapshot> {
    let path = path.as_ref();
    let document: SnapshotDocument = match SnapshotFormat::from_path(path)? {
        SnapshotFormat::Json => read_json_required(path)?,
        SnapshotFormat::Yaml => read_yaml_required(path)?,
    };

    let expenses = document
        .expenses
        .into_iter()
        .map(ExpenseDocument::into_expense)
        .collect::<SplitResult<Vec<_>>>()?;

    info!(
        path = %path.display(),
        group = %document.group.name,
        members = document.members.len(),
        expenses = expenses.len(),
        "loaded group snapshot"
    );

    Ok(GroupSnapshot::new(document.group, document.members, expenses))
}
