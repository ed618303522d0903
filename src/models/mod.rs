//! Core data models for groupsplit
//!
//! Inputs (members, expenses with their payments and shares) and the derived
//! outputs (balances and settlement transactions).

pub mod balance;
pub mod expense;
pub mod ids;
pub mod member;
pub mod money;
pub mod snapshot;
pub mod transaction;

pub use balance::{Balance, Balances, Counterparty};
pub use expense::{Expense, ExpenseValidationError, Payment, Share, SplitType};
pub use ids::{ExpenseId, GroupId, MemberId};
pub use member::{Group, Member};
pub use money::{Money, DEFAULT_TOLERANCE};
pub use snapshot::GroupSnapshot;
pub use transaction::Transaction;
