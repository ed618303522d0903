//! CLI command for snapshot validation

use clap::Args;
use std::path::PathBuf;

use crate::error::SplitResult;
use crate::storage::load_snapshot;

/// Arguments for `groupsplit validate`
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Group snapshot file (.json, .yaml or .yml)
    pub file: PathBuf,
}

/// Check a snapshot's consistency and report the first problem found
pub fn handle_validate_command(args: ValidateArgs) -> SplitResult<()> {
    let snapshot = load_snapshot(&args.file)?;
    snapshot.validate()?;

    println!(
        "Snapshot is valid: {} ({} members, {} expenses)",
        snapshot.group.name,
        snapshot.members.len(),
        snapshot.expenses.len()
    );
    Ok(())
}
