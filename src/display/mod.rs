//! Display formatting for terminal output
//!
//! Tables for balances, attribution edges and settlement plans, plus small
//! text helpers shared by the reports.

pub mod balance;
pub mod report;

pub use balance::{
    format_attribution, format_balance_details, format_balance_table, format_settlement_list,
};
