//! Service layer for groupsplit
//!
//! `balance` and `settlement` are the two pure computations over a group
//! snapshot; neither does I/O or keeps state between calls. `split` builds
//! shares for new expenses.

pub mod balance;
pub mod settlement;
pub mod split;

pub use balance::BalanceCalculator;
pub use settlement::SettlementOptimizer;
pub use split::{ShareBuilder, ShareRequest};

use crate::models::{Balances, Expense, Member, Transaction};

/// Compute balances with the default tolerance
pub fn compute_balances(members: &[Member], expenses: &[Expense]) -> Balances {
    BalanceCalculator::new().compute_balances(members, expenses)
}

/// Optimize a settlement plan with the default tolerance
pub fn optimize_transactions(balances: &Balances, members: &[Member]) -> Vec<Transaction> {
    SettlementOptimizer::new().optimize_transactions(balances, members)
}
