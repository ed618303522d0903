//! Settlement transaction model
//!
//! A single recommended payment between two members. Transactions are derived
//! fresh on every optimization and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::member::Member;
use super::money::Money;

/// An instruction for `from` to pay `to` the given amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub from: Member,
    pub to: Member,
    pub amount: Money,
}

impl Transaction {
    pub fn new(from: Member, to: Member, amount: Money) -> Self {
        Self { from, to, amount }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.from.name, self.to.name, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let txn = Transaction::new(
            Member::new("Bob", "bob@example.com"),
            Member::new("Alice", "alice@example.com"),
            Money::from_cents(3000),
        );
        assert_eq!(txn.to_string(), "Bob -> Alice: 30.00");
    }

    #[test]
    fn test_serialized_shape() {
        let txn = Transaction::new(
            Member::new("Carol", "carol@example.com"),
            Member::new("Alice", "alice@example.com"),
            Money::from_cents(1000),
        );
        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(value["from"]["name"], "Carol");
        assert_eq!(value["to"]["email"], "alice@example.com");
        assert_eq!(value["amount"], 10.0);
    }
}
