//! groupsplit - shared group expense balances
//!
//! This library works out, for one group of people sharing expenses, what
//! each member paid and owes, which member owes which other member because
//! of which expenses, and the shortest list of payments that settles
//! everybody.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (members, expenses, balances, etc.)
//! - `services`: Balance calculation, settlement optimization, share building
//! - `storage`: Snapshot loading and atomic file writes
//! - `reports`: The group balance report
//! - `display`: Terminal formatting
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers for the `groupsplit` binary
//!
//! # Example
//!
//! ```rust
//! use groupsplit_cli::models::{Expense, Member, Money, Share, SplitType};
//! use groupsplit_cli::{compute_balances, optimize_transactions};
//!
//! let alice = Member::new("Alice", "alice@example.com");
//! let bob = Member::new("Bob", "bob@example.com");
//! let members = vec![alice.clone(), bob.clone()];
//!
//! let taxi = Expense::new("Taxi", 50.0, SplitType::Equal)
//!     .paid_by(alice.id, 50.0)
//!     .with_shares(vec![Share::new(alice.id, 50.0, 25.0), Share::new(bob.id, 50.0, 25.0)]);
//!
//! let balances = compute_balances(&members, &[taxi]);
//! assert_eq!(balances[&bob.id].net, Money::from_cents(-2500));
//!
//! let plan = optimize_transactions(&balances, &members);
//! assert_eq!(plan.len(), 1);
//! assert_eq!(plan[0].from.id, bob.id);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SplitError, SplitResult};
pub use services::{compute_balances, optimize_transactions};
