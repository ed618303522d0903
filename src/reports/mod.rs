//! Reports module for groupsplit
//!
//! Combines the computed balances and settlement plan of a group into a
//! single document for display or export.

pub mod group_balance;

pub use group_balance::{GroupBalanceReport, ReportSummary};
