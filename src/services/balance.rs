//! Balance calculation service
//!
//! Turns a group's members and expenses into one [`Balance`] per member:
//! totals paid and owed, the net position, and the attribution edges saying
//! which member owes which other member because of which expenses.
//!
//! Totals are accumulated as raw `f64` and rounded to cents only when the
//! output records are built. Attribution edges are derived per expense and
//! then summed; they are never reconstructed from the aggregate net positions.

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::models::{
    Balance, Balances, Counterparty, Expense, Member, MemberId, Money, DEFAULT_TOLERANCE,
};

/// Service computing per-member balances for one group snapshot
#[derive(Debug, Clone, Copy)]
pub struct BalanceCalculator {
    tolerance: f64,
}

/// Unrounded running totals for one member
#[derive(Debug, Default)]
struct Tally {
    paid: f64,
    owed: f64,
    owes_to: IndexMap<MemberId, f64>,
    owed_by: IndexMap<MemberId, f64>,
}

impl Default for BalanceCalculator {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl BalanceCalculator {
    /// Create a calculator using the default 0.01 tolerance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with a custom tolerance for excess/deficit checks
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance: tolerance.max(0.0),
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Compute balances for every member in `members`
    ///
    /// The result iterates in member-list order. Payments and shares that
    /// reference a member outside `members` are left out of the totals; an
    /// attribution edge pointing at such a member is rendered with the
    /// placeholder identity from [`Member::unknown`].
    pub fn compute_balances(&self, members: &[Member], expenses: &[Expense]) -> Balances {
        let mut tallies: IndexMap<MemberId, Tally> = members
            .iter()
            .map(|m| (m.id, Tally::default()))
            .collect();

        self.accumulate_totals(&mut tallies, expenses);

        for expense in expenses {
            self.attribute_expense(&mut tallies, expense);
        }

        let balances: Balances = members
            .iter()
            .filter_map(|member| {
                let tally = tallies.swap_remove(&member.id)?;
                Some((member.id, build_balance(member.clone(), tally, members)))
            })
            .collect();

        info!(
            members = members.len(),
            expenses = expenses.len(),
            "computed group balances"
        );

        balances
    }

    /// Sum payments into `paid` and shares into `owed`
    fn accumulate_totals(&self, tallies: &mut IndexMap<MemberId, Tally>, expenses: &[Expense]) {
        for expense in expenses {
            for payment in &expense.payments {
                match tallies.get_mut(&payment.member_id) {
                    Some(tally) => tally.paid += payment.amount_paid,
                    None => warn!(
                        expense = %expense.id,
                        member = %payment.member_id,
                        "ignoring payment from a member outside the group"
                    ),
                }
            }

            for share in &expense.shares {
                match tallies.get_mut(&share.member_id) {
                    Some(tally) => tally.owed += share.share_amount,
                    None => warn!(
                        expense = %expense.id,
                        member = %share.member_id,
                        "ignoring share of a member outside the group"
                    ),
                }
            }
        }
    }

    /// Derive attribution edges from a single expense
    ///
    /// Each payer whose payments exceed their own share hands that excess out
    /// to the expense's under-paying members, in share order, until it is used
    /// up. A debtor's deficit is measured against the expense as a whole and is
    /// not drawn down between payers.
    fn attribute_expense(&self, tallies: &mut IndexMap<MemberId, Tally>, expense: &Expense) {
        let mut paid_in_expense: IndexMap<MemberId, f64> = IndexMap::new();
        for payment in &expense.payments {
            *paid_in_expense.entry(payment.member_id).or_insert(0.0) += payment.amount_paid;
        }

        let mut owed_in_expense: IndexMap<MemberId, f64> = IndexMap::new();
        for share in &expense.shares {
            *owed_in_expense.entry(share.member_id).or_insert(0.0) += share.share_amount;
        }

        for (&payer, &paid) in &paid_in_expense {
            let excess = paid - owed_in_expense.get(&payer).copied().unwrap_or(0.0);
            if excess <= self.tolerance {
                continue;
            }

            let mut remaining = excess;
            for (&debtor, &owed) in &owed_in_expense {
                if debtor == payer {
                    continue;
                }

                let deficit = owed - paid_in_expense.get(&debtor).copied().unwrap_or(0.0);
                if deficit <= self.tolerance {
                    continue;
                }

                let amount = remaining.min(deficit);
                remaining -= amount;

                debug!(
                    expense = %expense.id,
                    debtor = %debtor,
                    creditor = %payer,
                    amount,
                    "attributed debt"
                );

                if let Some(tally) = tallies.get_mut(&debtor) {
                    *tally.owes_to.entry(payer).or_insert(0.0) += amount;
                }
                if let Some(tally) = tallies.get_mut(&payer) {
                    *tally.owed_by.entry(debtor).or_insert(0.0) += amount;
                }

                if remaining <= 0.0 {
                    break;
                }
            }
        }
    }
}

/// Round a member's tally into its presentation record
fn build_balance(member: Member, tally: Tally, members: &[Member]) -> Balance {
    let to_counterparties = |edges: IndexMap<MemberId, f64>| -> Vec<Counterparty> {
        edges
            .into_iter()
            .map(|(other, amount)| Counterparty {
                member: Member::resolve(members, other),
                amount: Money::from_amount(amount),
            })
            .collect()
    };

    Balance {
        member,
        paid: Money::from_amount(tally.paid),
        owed: Money::from_amount(tally.owed),
        net: Money::from_amount(tally.paid - tally.owed),
        owes_to: to_counterparties(tally.owes_to),
        owed_by: to_counterparties(tally.owed_by),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Share, SplitType};

    fn members(names: &[&str]) -> Vec<Member> {
        names
            .iter()
            .map(|n| Member::new(*n, format!("{}@example.com", n.to_lowercase())))
            .collect()
    }

    fn shares(split: &[(MemberId, f64)]) -> Vec<Share> {
        split
            .iter()
            .map(|&(id, amount)| Share::new(id, 0.0, amount))
            .collect()
    }

    #[test]
    fn test_single_payer_three_way_split() {
        let group = members(&["A", "B", "C"]);
        let (a, b, c) = (group[0].id, group[1].id, group[2].id);
        let expense = Expense::new("Groceries", 90.0, SplitType::Equal)
            .paid_by(a, 90.0)
            .with_shares(shares(&[(a, 30.0), (b, 30.0), (c, 30.0)]));

        let balances = BalanceCalculator::new().compute_balances(&group, &[expense]);

        assert_eq!(balances[&a].paid, Money::from_cents(9000));
        assert_eq!(balances[&a].owed, Money::from_cents(3000));
        assert_eq!(balances[&a].net, Money::from_cents(6000));
        assert_eq!(balances[&b].net, Money::from_cents(-3000));
        assert_eq!(balances[&c].net, Money::from_cents(-3000));

        assert_eq!(balances[&b].owes_to_amount(a), Money::from_cents(3000));
        assert_eq!(balances[&c].owes_to_amount(a), Money::from_cents(3000));
        assert_eq!(balances[&a].owed_by.len(), 2);
        assert!(balances[&a].owes_to.is_empty());
    }

    #[test]
    fn test_two_member_half_split() {
        let group = members(&["A", "B"]);
        let (a, b) = (group[0].id, group[1].id);
        let expense = Expense::new("Dinner", 50.0, SplitType::Equal)
            .paid_by(a, 50.0)
            .with_shares(shares(&[(a, 25.0), (b, 25.0)]));

        let balances = BalanceCalculator::new().compute_balances(&group, &[expense]);

        assert_eq!(balances[&a].net, Money::from_cents(2500));
        assert_eq!(balances[&b].net, Money::from_cents(-2500));
        assert_eq!(balances[&a].owed_by_amount(b), Money::from_cents(2500));
    }

    #[test]
    fn test_balances_follow_member_order() {
        let group = members(&["Zed", "Amy", "Mo"]);
        let balances = BalanceCalculator::new().compute_balances(&group, &[]);

        let names: Vec<_> = balances.values().map(|b| b.member.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Amy", "Mo"]);
        assert!(balances.values().all(|b| b.net.is_zero()));
    }

    #[test]
    fn test_edges_summed_across_expenses() {
        let group = members(&["A", "B"]);
        let (a, b) = (group[0].id, group[1].id);
        let first = Expense::new("Lunch", 20.0, SplitType::Equal)
            .paid_by(a, 20.0)
            .with_shares(shares(&[(a, 10.0), (b, 10.0)]));
        let second = Expense::new("Coffee", 8.0, SplitType::Equal)
            .paid_by(a, 8.0)
            .with_shares(shares(&[(a, 4.0), (b, 4.0)]));

        let balances = BalanceCalculator::new().compute_balances(&group, &[first, second]);

        assert_eq!(balances[&b].owes_to.len(), 1);
        assert_eq!(balances[&b].owes_to_amount(a), Money::from_cents(1400));
    }

    #[test]
    fn test_opposing_expenses_keep_both_edges() {
        // Edges come from each expense, not from the aggregate nets, so two
        // mirror-image expenses leave both members at zero net with edges both ways.
        let group = members(&["A", "B"]);
        let (a, b) = (group[0].id, group[1].id);
        let first = Expense::new("Tickets", 40.0, SplitType::Equal)
            .paid_by(a, 40.0)
            .with_shares(shares(&[(a, 20.0), (b, 20.0)]));
        let second = Expense::new("Snacks", 40.0, SplitType::Equal)
            .paid_by(b, 40.0)
            .with_shares(shares(&[(a, 20.0), (b, 20.0)]));

        let balances = BalanceCalculator::new().compute_balances(&group, &[first, second]);

        assert!(balances[&a].net.is_zero());
        assert!(balances[&b].net.is_zero());
        assert_eq!(balances[&a].owes_to_amount(b), Money::from_cents(2000));
        assert_eq!(balances[&b].owes_to_amount(a), Money::from_cents(2000));
    }

    #[test]
    fn test_multiple_payers_split_excess() {
        let group = members(&["A", "B", "C"]);
        let (a, b, c) = (group[0].id, group[1].id, group[2].id);
        let expense = Expense::new("Cabin", 120.0, SplitType::Equal)
            .paid_by(a, 70.0)
            .paid_by(b, 50.0)
            .with_shares(shares(&[(a, 40.0), (b, 40.0), (c, 40.0)]));

        let balances = BalanceCalculator::new().compute_balances(&group, &[expense]);

        assert_eq!(balances[&a].net, Money::from_cents(3000));
        assert_eq!(balances[&b].net, Money::from_cents(1000));
        assert_eq!(balances[&c].net, Money::from_cents(-4000));
        assert_eq!(balances[&c].owes_to_amount(a), Money::from_cents(3000));
        assert_eq!(balances[&c].owes_to_amount(b), Money::from_cents(1000));
        assert!(balances[&a].owes_to.is_empty());
        assert!(balances[&b].owes_to.is_empty());
    }

    #[test]
    fn test_multiple_payers_do_not_draw_down_deficits() {
        // Each payer measures a debtor's deficit against the whole expense, so
        // the first debtor in share order absorbs both payers' excess.
        let group = members(&["A", "B", "C", "D"]);
        let (a, b, c, d) = (group[0].id, group[1].id, group[2].id, group[3].id);
        let expense = Expense::new("Chalet", 120.0, SplitType::Equal)
            .paid_by(a, 60.0)
            .paid_by(d, 60.0)
            .with_shares(shares(&[(a, 30.0), (b, 30.0), (c, 30.0), (d, 30.0)]));

        let balances = BalanceCalculator::new().compute_balances(&group, &[expense]);

        assert_eq!(balances[&b].owes_to_amount(a), Money::from_cents(3000));
        assert_eq!(balances[&b].owes_to_amount(d), Money::from_cents(3000));
        assert!(balances[&c].owes_to.is_empty());
        assert_eq!(balances[&c].owes_to_amount(a), Money::zero());
        assert_eq!(balances[&c].owes_to_amount(d), Money::zero());

        assert_eq!(balances[&b].net, Money::from_cents(-3000));
        assert_eq!(balances[&c].net, Money::from_cents(-3000));
        assert_eq!(balances[&a].owed_by.len(), 1);
        assert_eq!(balances[&d].owed_by.len(), 1);
    }

    #[test]
    fn test_leftover_excess_below_tolerance_still_attributed() {
        let group = members(&["A", "B", "C"]);
        let (a, b, c) = (group[0].id, group[1].id, group[2].id);
        let expense = Expense::new("Deposit", 60.0, SplitType::Amount)
            .paid_by(a, 50.006)
            .with_shares(shares(&[(a, 20.0), (b, 30.0), (c, 10.0)]));

        let balances = BalanceCalculator::new().compute_balances(&group, &[expense]);

        assert_eq!(balances[&b].owes_to_amount(a), Money::from_cents(3000));
        assert_eq!(balances[&c].owes_to_amount(a), Money::from_cents(1));
        assert_eq!(balances[&a].owed_by_amount(c), Money::from_cents(1));
    }

    #[test]
    fn test_underpaying_payer_creates_no_edges() {
        let group = members(&["A", "B"]);
        let (a, b) = (group[0].id, group[1].id);
        let expense = Expense::new("Gas", 30.0, SplitType::Amount)
            .paid_by(a, 10.0)
            .paid_by(b, 20.0)
            .with_shares(shares(&[(a, 10.0), (b, 20.0)]));

        let balances = BalanceCalculator::new().compute_balances(&group, &[expense]);

        assert!(balances.values().all(|bal| bal.owes_to.is_empty()));
        assert!(balances.values().all(|bal| bal.owed_by.is_empty()));
    }

    #[test]
    fn test_excess_within_tolerance_ignored() {
        let group = members(&["A", "B"]);
        let (a, b) = (group[0].id, group[1].id);
        let expense = Expense::new("Rounding", 10.0, SplitType::Amount)
            .paid_by(a, 5.005)
            .paid_by(b, 4.995)
            .with_shares(shares(&[(a, 5.0), (b, 5.0)]));

        let balances = BalanceCalculator::new().compute_balances(&group, &[expense]);

        assert!(balances[&b].owes_to.is_empty());
    }

    #[test]
    fn test_rounds_only_at_the_end() {
        let group = members(&["A", "B", "C"]);
        let (a, b, c) = (group[0].id, group[1].id, group[2].id);
        let third = 100.0 / 3.0;
        let expenses: Vec<Expense> = (0..3)
            .map(|_| {
                Expense::new("Thirds", 100.0, SplitType::Equal)
                    .paid_by(a, 100.0)
                    .with_shares(shares(&[(a, third), (b, third), (c, third)]))
            })
            .collect();

        let balances = BalanceCalculator::new().compute_balances(&group, &expenses);

        // 3 x 33.333... is exactly 100.00; rounding each share first would give 99.99.
        assert_eq!(balances[&b].owed, Money::from_cents(10000));
        assert_eq!(balances[&a].net, Money::from_cents(20000));
    }

    #[test]
    fn test_unknown_members_ignored_in_totals() {
        let group = members(&["A", "B"]);
        let (a, b) = (group[0].id, group[1].id);
        let stranger = MemberId::new();
        let expense = Expense::new("Party", 90.0, SplitType::Equal)
            .paid_by(a, 90.0)
            .with_shares(shares(&[(a, 30.0), (b, 30.0), (stranger, 30.0)]));

        let balances = BalanceCalculator::new().compute_balances(&group, &[expense]);

        assert_eq!(balances.len(), 2);
        assert!(!balances.contains_key(&stranger));
        assert_eq!(balances[&a].net, Money::from_cents(6000));

        let placeholder = balances[&a]
            .owed_by
            .iter()
            .find(|c| c.member.id == stranger)
            .unwrap();
        assert_eq!(placeholder.member.name, "Unknown");
        assert_eq!(placeholder.member.email, "unknown@example.com");
        assert_eq!(placeholder.amount, Money::from_cents(3000));
    }

    #[test]
    fn test_edge_order_follows_shares() {
        let group = members(&["A", "B", "C"]);
        let (a, b, c) = (group[0].id, group[1].id, group[2].id);
        let expense = Expense::new("Museum", 30.0, SplitType::Equal)
            .paid_by(a, 30.0)
            .with_shares(shares(&[(c, 10.0), (a, 10.0), (b, 10.0)]));

        let balances = BalanceCalculator::new().compute_balances(&group, &[expense]);

        let order: Vec<_> = balances[&a].owed_by.iter().map(|e| e.member.id).collect();
        assert_eq!(order, vec![c, b]);
    }
}
