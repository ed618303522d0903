//! Settlement optimization service
//!
//! Reduces a set of net positions to a short list of point-to-point payments.
//! Only each member's net is consulted; attribution edges play no part, so
//! the resulting plan says what to pay, not why.
//!
//! Strategy: repeatedly match the largest remaining debtor with the largest
//! remaining creditor and settle the smaller of the two amounts. Every match
//! clears at least one party, so `n` debtors and `m` creditors never need
//! more than `n + m - 1` transactions.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::models::{Balances, Member, Money, Transaction, DEFAULT_TOLERANCE};

/// Service producing settlement plans from net positions
#[derive(Debug, Clone, Copy)]
pub struct SettlementOptimizer {
    tolerance: f64,
}

/// A party still waiting to pay or be paid, in cents
#[derive(Debug)]
struct OpenPosition {
    member: Member,
    remaining: i64,
}

impl Default for SettlementOptimizer {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl SettlementOptimizer {
    /// Create an optimizer using the default 0.01 tolerance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an optimizer treating nets within `tolerance` of zero as settled
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance: tolerance.max(0.0),
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Build a settlement plan from computed balances
    ///
    /// Positions are taken in `members` order, followed by any balance whose
    /// member is missing from `members`. That order breaks ties between equal
    /// amounts.
    pub fn optimize_transactions(
        &self,
        balances: &Balances,
        members: &[Member],
    ) -> Vec<Transaction> {
        let listed = members
            .iter()
            .filter_map(|m| balances.get(&m.id))
            .map(|b| (b.member.clone(), b.net));
        let unlisted = balances
            .values()
            .filter(|b| !members.iter().any(|m| m.id == b.member.id))
            .map(|b| (b.member.clone(), b.net));

        self.optimize_net_positions(listed.chain(unlisted))
    }

    /// Build a settlement plan from `(member, net)` pairs
    ///
    /// Positive nets are owed money, negative nets owe money. Nets within the
    /// tolerance of zero are left out and never appear in a transaction.
    pub fn optimize_net_positions<I>(&self, positions: I) -> Vec<Transaction>
    where
        I: IntoIterator<Item = (Member, Money)>,
    {
        let tolerance = self.tolerance_cents();
        let mut debtors = Vec::new();
        let mut creditors = Vec::new();

        for (member, net) in positions {
            let cents = net.cents();
            if cents < -tolerance {
                debtors.push(OpenPosition {
                    member,
                    remaining: cents.saturating_neg(),
                });
            } else if cents > tolerance {
                creditors.push(OpenPosition {
                    member,
                    remaining: cents,
                });
            }
        }

        // sort_by_key is stable: equal amounts keep their input order
        debtors.sort_by_key(|p| std::cmp::Reverse(p.remaining));
        creditors.sort_by_key(|p| std::cmp::Reverse(p.remaining));

        let debtor_count = debtors.len();
        let creditor_count = creditors.len();
        let mut debtors = VecDeque::from(debtors);
        let mut creditors = VecDeque::from(creditors);

        // Anything below one cent is fully settled, whatever the tolerance.
        let settled_below = tolerance.max(1);
        let mut transactions = Vec::new();

        while let (Some(debtor), Some(creditor)) = (debtors.front_mut(), creditors.front_mut()) {
            let amount = debtor.remaining.min(creditor.remaining);

            debug!(
                from = %debtor.member.id,
                to = %creditor.member.id,
                cents = amount,
                "matched settlement"
            );

            transactions.push(Transaction::new(
                debtor.member.clone(),
                creditor.member.clone(),
                Money::from_cents(amount),
            ));

            debtor.remaining -= amount;
            creditor.remaining -= amount;

            if debtor.remaining < settled_below {
                debtors.pop_front();
            }
            if creditor.remaining < settled_below {
                creditors.pop_front();
            }
        }

        info!(
            debtors = debtor_count,
            creditors = creditor_count,
            transactions = transactions.len(),
            "optimized settlement plan"
        );

        transactions
    }

    fn tolerance_cents(&self) -> i64 {
        (self.tolerance * 100.0).round() as i64
    }
}
