//! Balance model
//!
//! The per-member record produced by the balance calculator. All amounts are
//! already rounded to cents; the calculator accumulates in full precision and
//! only builds these records at the end.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ids::MemberId;
use super::member::Member;
use super::money::Money;

/// One attribution edge seen from one side: the other member and the amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counterparty {
    #[serde(rename = "user")]
    pub member: Member,
    pub amount: Money,
}

/// A member's position across all of a group's expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(rename = "user")]
    pub member: Member,

    /// Sum of this member's payments
    pub paid: Money,

    /// Sum of this member's shares
    pub owed: Money,

    /// `paid - owed`; positive means the group owes this member
    pub net: Money,

    /// Members this member owes, in the order the debts were first attributed
    #[serde(default)]
    pub owes_to: Vec<Counterparty>,

    /// Members owing this member, in the order the debts were first attributed
    #[serde(default)]
    pub owed_by: Vec<Counterparty>,
}

impl Balance {
    /// A zeroed balance with no attribution edges
    pub fn empty(member: Member) -> Self {
        Self {
            member,
            paid: Money::zero(),
            owed: Money::zero(),
            net: Money::zero(),
            owes_to: Vec::new(),
            owed_by: Vec::new(),
        }
    }

    /// Amount this member owes `creditor`, zero when there is no edge
    pub fn owes_to_amount(&self, creditor: MemberId) -> Money {
        self.owes_to
            .iter()
            .find(|c| c.member.id == creditor)
            .map(|c| c.amount)
            .unwrap_or_default()
    }

    /// Amount `debtor` owes this member, zero when there is no edge
    pub fn owed_by_amount(&self, debtor: MemberId) -> Money {
        self.owed_by
            .iter()
            .find(|c| c.member.id == debtor)
            .map(|c| c.amount)
            .unwrap_or_default()
    }

    /// Whether the net position is within `tolerance` of zero
    pub fn is_settled(&self, tolerance: f64) -> bool {
        self.net.as_amount().abs() <= tolerance
    }
}

/// Balances keyed by member id, iterating in member-list order
pub type Balances = IndexMap<MemberId, Balance>;
