//! CLI commands for balances and settlement plans

use clap::Args;
use std::path::PathBuf;

use super::load_group;
use crate::config::Settings;
use crate::display::{
    format_attribution, format_balance_details, format_balance_table, format_settlement_list,
};
use crate::error::SplitResult;
use crate::services::{BalanceCalculator, SettlementOptimizer};

/// Arguments for `groupsplit balances`
#[derive(Args, Debug)]
pub struct BalancesArgs {
    /// Group snapshot file (.json, .yaml or .yml)
    pub file: PathBuf,

    /// Reject snapshots that fail validation
    #[arg(long)]
    pub strict: bool,

    /// Also list who owes whom, per member
    #[arg(short, long)]
    pub details: bool,
}

/// Arguments for `groupsplit settle`
#[derive(Args, Debug)]
pub struct SettleArgs {
    /// Group snapshot file (.json, .yaml or .yml)
    pub file: PathBuf,

    /// Reject snapshots that fail validation
    #[arg(long)]
    pub strict: bool,
}

/// Show each member's paid, owed and net totals
pub fn handle_balances_command(settings: &Settings, args: BalancesArgs) -> SplitResult<()> {
    let snapshot = load_group(&args.file, args.strict)?;
    let balances = BalanceCalculator::with_tolerance(settings.tolerance)
        .compute_balances(&snapshot.members, &snapshot.expenses);
    let symbol = &settings.currency_symbol;

    println!("Balances for {}", snapshot.group.name);
    println!("{}", format_balance_table(balances.values(), symbol));

    if args.details {
        println!();
        println!("Who owes whom");
        println!("{}", format_attribution(balances.values(), symbol));
        for balance in balances.values() {
            println!();
            print!("{}", format_balance_details(balance, symbol));
        }
    }

    Ok(())
}

/// Show the settlement plan for a group
pub fn handle_settle_command(settings: &Settings, args: SettleArgs) -> SplitResult<()> {
    let snapshot = load_group(&args.file, args.strict)?;
    let balances = BalanceCalculator::with_tolerance(settings.tolerance)
        .compute_balances(&snapshot.members, &snapshot.expenses);
    let plan = SettlementOptimizer::with_tolerance(settings.tolerance)
        .optimize_transactions(&balances, &snapshot.members);

    println!("Settlement plan for {}", snapshot.group.name);
    println!("{}", format_settlement_list(&plan, &settings.currency_symbol));

    Ok(())
}
