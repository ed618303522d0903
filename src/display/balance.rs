//! Balance and settlement display formatting
//!
//! Renders computed balances, attribution edges and settlement plans as
//! terminal tables.

use tabled::{settings::Style, Table, Tabled};

use super::report::truncate;
use crate::models::{Balance, MemberId, Transaction};

const NAME_WIDTH: usize = 24;

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Member")]
    member: String,
    #[tabled(rename = "Paid")]
    paid: String,
    #[tabled(rename = "Owed")]
    owed: String,
    #[tabled(rename = "Net")]
    net: String,
}

#[derive(Tabled)]
struct EdgeRow {
    #[tabled(rename = "Debtor")]
    debtor: String,
    #[tabled(rename = "Creditor")]
    creditor: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct SettlementRow {
    #[tabled(rename = "#")]
    step: usize,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format balances as a table with one row per member
pub fn format_balance_table<'a, I>(balances: I, symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Balance>,
{
    let rows: Vec<BalanceRow> = balances
        .into_iter()
        .map(|b| BalanceRow {
            member: truncate(&b.member.name, NAME_WIDTH),
            paid: b.paid.format_with_symbol(symbol),
            owed: b.owed.format_with_symbol(symbol),
            net: b.net.format_with_symbol(symbol),
        })
        .collect();

    if rows.is_empty() {
        return "No members found.".to_string();
    }

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format every attribution edge, read from the debtor side
///
/// Each edge appears once: `owed_by` is the inverse view of `owes_to`, so it
/// only contributes rows for debtors without a balance of their own.
pub fn format_attribution<'a, I>(balances: I, symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Balance>,
{
    let balances: Vec<&Balance> = balances.into_iter().collect();
    let has_balance = |id: MemberId| balances.iter().any(|b| b.member.id == id);

    let mut rows: Vec<EdgeRow> = Vec::new();
    for balance in &balances {
        for edge in &balance.owes_to {
            rows.push(EdgeRow {
                debtor: truncate(&balance.member.name, NAME_WIDTH),
                creditor: truncate(&edge.member.name, NAME_WIDTH),
                amount: edge.amount.format_with_symbol(symbol),
            });
        }
    }
    for balance in &balances {
        for edge in balance.owed_by.iter().filter(|e| !has_balance(e.member.id)) {
            rows.push(EdgeRow {
                debtor: truncate(&edge.member.name, NAME_WIDTH),
                creditor: truncate(&balance.member.name, NAME_WIDTH),
                amount: edge.amount.format_with_symbol(symbol),
            });
        }
    }

    if rows.is_empty() {
        return "No debts between members.".to_string();
    }

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the detail view of one member's balance
pub fn format_balance_details(balance: &Balance, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Member:  {}\n", balance.member.name));
    if !balance.member.email.is_empty() {
        output.push_str(&format!("Email:   {}\n", balance.member.email));
    }
    output.push_str(&format!("Paid:    {}\n", balance.paid.format_with_symbol(symbol)));
    output.push_str(&format!("Owed:    {}\n", balance.owed.format_with_symbol(symbol)));
    output.push_str(&format!("Net:     {}\n", balance.net.format_with_symbol(symbol)));

    for entry in &balance.owes_to {
        output.push_str(&format!(
            "  owes {} {}\n",
            entry.member.name,
            entry.amount.format_with_symbol(symbol)
        ));
    }
    for entry in &balance.owed_by {
        output.push_str(&format!(
            "  is owed {} by {}\n",
            entry.amount.format_with_symbol(symbol),
            entry.member.name
        ));
    }

    output
}

/// Format a settlement plan as a numbered table
pub fn format_settlement_list(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "Everyone is settled up.".to_string();
    }

    let rows: Vec<SettlementRow> = transactions
        .iter()
        .enumerate()
        .map(|(i, t)| SettlementRow {
            step: i + 1,
            from: truncate(&t.from.name, NAME_WIDTH),
            to: truncate(&t.to.name, NAME_WIDTH),
            amount: t.amount.format_with_symbol(symbol),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Counterparty, Member, Money};

    fn sample() -> Vec<Balance> {
        let alice = Member::new("Alice", "alice@example.com");
        let bob = Member::new("Bob", "");

        let mut a = Balance::empty(alice.clone());
        a.paid = Money::from_cents(5000);
        a.owed = Money::from_cents(2500);
        a.net = Money::from_cents(2500);
        a.owed_by.push(Counterparty {
            member: bob.clone(),
            amount: Money::from_cents(2500),
        });

        let mut b = Balance::empty(bob);
        b.owed = Money::from_cents(2500);
        b.net = Money::from_cents(-2500);
        b.owes_to.push(Counterparty {
            member: alice,
            amount: Money::from_cents(2500),
        });

        vec![a, b]
    }

    #[test]
    fn test_balance_table() {
        let output = format_balance_table(&sample(), "$");
        assert!(output.contains("Member"));
        assert!(output.contains("Alice"));
        assert!(output.contains("$50.00"));
        assert!(output.contains("-$25.00"));
    }

    #[test]
    fn test_empty_balance_table() {
        assert_eq!(format_balance_table(&Vec::<Balance>::new(), "$"), "No members found.");
    }

    #[test]
    fn test_attribution_lists_each_edge_once() {
        let output = format_attribution(&sample(), "€");
        assert_eq!(output.matches("€25.00").count(), 1);
        assert!(output.contains("Debtor"));
    }

    #[test]
    fn test_attribution_includes_debtors_outside_group() {
        let mut balances = sample();
        balances[0].owed_by.push(Counterparty {
            member: Member::unknown(MemberId::new()),
            amount: Money::from_cents(1234),
        });

        let output = format_attribution(&balances, "$");
        assert!(output.contains("Unknown"));
        assert!(output.contains("$12.34"));
        assert_eq!(output.matches("$25.00").count(), 1);
    }

    #[test]
    fn test_balance_details() {
        let balances = sample();
        let output = format_balance_details(&balances[1], "$");
        assert!(output.contains("owes Alice $25.00"));
        assert!(!output.contains("Email"));
    }

    #[test]
    fn test_settlement_list() {
        let plan = vec![Transaction::new(
            Member::new("Bob", ""),
            Member::new("Alice", ""),
            Money::from_cents(2500),
        )];
        let output = format_settlement_list(&plan, "$");
        assert!(output.contains("Bob"));
        assert!(output.contains("$25.00"));
        assert_eq!(format_settlement_list(&[], "$"), "Everyone is settled up.");
    }
}
