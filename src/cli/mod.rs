//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod balances;
pub mod report;
pub mod validate;

pub use balances::{handle_balances_command, handle_settle_command, BalancesArgs, SettleArgs};
pub use report::{handle_report_command, ReportArgs};
pub use validate::{handle_validate_command, ValidateArgs};

use std::path::Path;

use tracing::debug;

use crate::error::SplitResult;
use crate::models::GroupSnapshot;
use crate::storage::load_snapshot;

/// Load a snapshot, validating it first when `strict` is set
pub(crate) fn load_group(path: &Path, strict: bool) -> SplitResult<GroupSnapshot> {
    let snapshot = load_snapshot(path)?;
    if strict {
        snapshot.validate()?;
        debug!(group = %snapshot.group.name, "snapshot passed strict validation");
    }
    Ok(snapshot)
}
