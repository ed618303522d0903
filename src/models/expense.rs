//! Expense model
//!
//! An expense carries two child collections: the payments members put in and
//! the shares members are responsible for. Amounts are raw `f64` values so
//! uneven splits keep full precision until presentation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ExpenseId, MemberId};
use super::money::DEFAULT_TOLERANCE;

/// How an expense's total is divided into shares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    /// Every share member owes the same amount
    #[default]
    Equal,
    /// Each share member owes a percentage of the total
    Percentage,
    /// Each share member owes an explicit amount
    Amount,
}

impl fmt::Display for SplitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "equal"),
            Self::Percentage => write!(f, "percentage"),
            Self::Amount => write!(f, "amount"),
        }
    }
}

/// Money a member put in for an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(alias = "user_id")]
    pub member_id: MemberId,
    pub amount_paid: f64,
}

impl Payment {
    pub fn new(member_id: MemberId, amount_paid: f64) -> Self {
        Self {
            member_id,
            amount_paid,
        }
    }
}

/// The portion of an expense a member is responsible for
///
/// Only `share_amount` feeds balance computations; `share_percentage` is kept
/// for display and validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    #[serde(alias = "user_id")]
    pub member_id: MemberId,
    #[serde(default)]
    pub share_percentage: f64,
    pub share_amount: f64,
}

impl Share {
    pub fn new(member_id: MemberId, share_percentage: f64, share_amount: f64) -> Self {
        Self {
            member_id,
            share_percentage,
            share_amount,
        }
    }
}

/// A shared expense within a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default)]
    pub id: ExpenseId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Total amount of the expense
    pub amount: f64,

    #[serde(default)]
    pub expense_date: Option<NaiveDate>,

    #[serde(default)]
    pub split_type: SplitType,

    #[serde(default)]
    pub payments: Vec<Payment>,

    #[serde(default)]
    pub shares: Vec<Share>,
}

impl Expense {
    /// Create an expense with no payments or shares yet
    pub fn new(title: impl Into<String>, amount: f64, split_type: SplitType) -> Self {
        Self {
            id: ExpenseId::new(),
            title: title.into(),
            description: String::new(),
            amount,
            expense_date: None,
            split_type,
            payments: Vec::new(),
            shares: Vec::new(),
        }
    }

    /// Add a payment, builder style
    pub fn paid_by(mut self, member_id: MemberId, amount_paid: f64) -> Self {
        self.payments.push(Payment::new(member_id, amount_paid));
        self
    }

    /// Replace the shares, builder style
    pub fn with_shares(mut self, shares: Vec<Share>) -> Self {
        self.shares = shares;
        self
    }

    /// Sum of all payments
    pub fn total_paid(&self) -> f64 {
        self.payments.iter().map(|p| p.amount_paid).sum()
    }

    /// Sum of all share amounts
    pub fn total_shared(&self) -> f64 {
        self.shares.iter().map(|s| s.share_amount).sum()
    }

    /// Every member id referenced by a payment or a share
    pub fn member_ids(&self) -> impl Iterator<Item = MemberId> + '_ {
        self.payments
            .iter()
            .map(|p| p.member_id)
            .chain(self.shares.iter().map(|s| s.member_id))
    }

    /// Check the expense is internally consistent
    ///
    /// Balance computations do not call this; it is a pre-flight check for
    /// callers that want to reject malformed input instead of degrading.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount < DEFAULT_TOLERANCE {
            return Err(ExpenseValidationError::AmountTooSmall(self.amount));
        }
        if self.payments.is_empty() {
            return Err(ExpenseValidationError::NoPayments);
        }
        if self.shares.is_empty() {
            return Err(ExpenseValidationError::NoShares);
        }
        if let Some(p) = self
            .payments
            .iter()
            .find(|p| p.amount_paid < DEFAULT_TOLERANCE)
        {
            return Err(ExpenseValidationError::PaymentTooSmall(p.amount_paid));
        }

        let paid = self.total_paid();
        if (paid - self.amount).abs() > DEFAULT_TOLERANCE {
            return Err(ExpenseValidationError::PaymentsMismatch {
                paid,
                amount: self.amount,
            });
        }

        if self.split_type == SplitType::Percentage {
            let total: f64 = self.shares.iter().map(|s| s.share_percentage).sum();
            if (total - 100.0).abs() > DEFAULT_TOLERANCE {
                return Err(ExpenseValidationError::PercentagesMismatch(total));
            }
        }

        let shared = self.total_shared();
        if (shared - self.amount).abs() > DEFAULT_TOLERANCE {
            return Err(ExpenseValidationError::SharesMismatch {
                shared,
                amount: self.amount,
            });
        }

        Ok(())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    AmountTooSmall(f64),
    NoPayments,
    NoShares,
    PaymentTooSmall(f64),
    PaymentsMismatch { paid: f64, amount: f64 },
    PercentagesMismatch(f64),
    SharesMismatch { shared: f64, amount: f64 },
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmountTooSmall(a) => {
                write!(f, "Expense amount must be at least 0.01, got {:.2}", a)
            }
            Self::NoPayments => write!(f, "Expense must have at least one payment"),
            Self::NoShares => write!(f, "Expense must have at least one share"),
            Self::PaymentTooSmall(a) => {
                write!(f, "Payment amount must be at least 0.01, got {:.2}", a)
            }
            Self::PaymentsMismatch { paid, amount } => write!(
                f,
                "Payments total {:.2} does not match expense amount {:.2}",
                paid, amount
            ),
            Self::PercentagesMismatch(total) => {
                write!(f, "Share percentages must total 100%, got {:.2}%", total)
            }
            Self::SharesMismatch { shared, amount } => write!(
                f,
                "Shares total {:.2} does not match expense amount {:.2}",
                shared, amount
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
