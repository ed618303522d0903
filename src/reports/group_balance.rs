//! Group Balance Report
//!
//! Runs the balance calculator and the settlement optimizer over one group
//! snapshot and summarizes the outcome.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Settings;
use crate::display::report::{double_separator, format_header, format_net_colored, separator};
use crate::display::{format_attribution, format_balance_table, format_settlement_list};
use crate::models::{Balance, Group, GroupSnapshot, Money, Transaction};
use crate::services::{BalanceCalculator, SettlementOptimizer};

const REPORT_WIDTH: usize = 60;

/// Totals and counts describing a group's position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub member_count: usize,
    pub expense_count: usize,
    /// Sum of expense amounts
    pub total_expenses: Money,
    /// Sum of every member's paid total
    pub total_paid: Money,
    /// Sum of every member's owed total
    pub total_owed: Money,
    /// Sum of nets; zero for a well-formed snapshot
    pub net_sum: Money,
    pub debtor_count: usize,
    pub creditor_count: usize,
    pub settled_count: usize,
    pub transaction_count: usize,
}

/// Balances and settlement plan for one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBalanceReport {
    pub group: Group,
    /// Tolerance both computations ran with
    pub tolerance: f64,
    /// Balances in member order
    pub balances: Vec<Balance>,
    pub transactions: Vec<Transaction>,
    pub summary: ReportSummary,
}

impl GroupBalanceReport {
    /// Generate a report for a snapshot
    pub fn generate(snapshot: &GroupSnapshot, settings: &Settings) -> Self {
        let tolerance = settings.tolerance;
        let balances = BalanceCalculator::with_tolerance(tolerance)
            .compute_balances(&snapshot.members, &snapshot.expenses);
        let transactions = SettlementOptimizer::with_tolerance(tolerance)
            .optimize_transactions(&balances, &snapshot.members);

        let balances: Vec<Balance> = balances.into_values().collect();

        let mut debtor_count = 0;
        let mut creditor_count = 0;
        let mut settled_count = 0;
        for balance in &balances {
            if balance.is_settled(tolerance) {
                settled_count += 1;
            } else if balance.net.is_negative() {
                debtor_count += 1;
            } else {
                creditor_count += 1;
            }
        }

        let summary = ReportSummary {
            member_count: balances.len(),
            expense_count: snapshot.expenses.len(),
            total_expenses: Money::from_amount(snapshot.total_expenses()),
            total_paid: balances.iter().map(|b| b.paid).sum(),
            total_owed: balances.iter().map(|b| b.owed).sum(),
            net_sum: balances.iter().map(|b| b.net).sum(),
            debtor_count,
            creditor_count,
            settled_count,
            transaction_count: transactions.len(),
        };

        info!(
            group = %snapshot.group.name,
            debtors = debtor_count,
            creditors = creditor_count,
            transactions = summary.transaction_count,
            "generated group balance report"
        );

        Self {
            group: snapshot.group.clone(),
            tolerance,
            balances,
            transactions,
            summary,
        }
    }

    /// Whether every member is within tolerance of zero
    pub fn is_settled(&self) -> bool {
        self.summary.debtor_count == 0 && self.summary.creditor_count == 0
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format_header(
            &format!("Group Balances: {}", self.group.name),
            REPORT_WIDTH,
        ));
        output.push('\n');
        output.push_str(&double_separator(REPORT_WIDTH));
        output.push('\n');

        let s = &self.summary;
        output.push_str(&format!("Members:        {:>15}\n", s.member_count));
        output.push_str(&format!("Expenses:       {:>15}\n", s.expense_count));
        output.push_str(&format!(
            "Total Spent:    {:>15}\n",
            s.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total Paid:     {:>15}\n",
            s.total_paid.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total Owed:     {:>15}\n",
            s.total_owed.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Sum of Nets:    {:>15}\n",
            s.net_sum.format_with_symbol(symbol)
        ));
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');

        output.push_str("\nBalances\n");
        output.push_str(&format_balance_table(&self.balances, symbol));
        output.push('\n');

        output.push_str("\nWho Owes Whom\n");
        output.push_str(&format_attribution(&self.balances, symbol));
        output.push('\n');

        output.push_str("\nSettlement Plan\n");
        output.push_str(&format_settlement_list(&self.transactions, symbol));
        output.push('\n');

        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        for balance in self.balances.iter().filter(|b| !b.is_settled(self.tolerance)) {
            output.push_str(&format!(
                "{:<30} {}\n",
                balance.member.name,
                format_net_colored(balance.net, symbol)
            ));
        }
        output.push_str(&format!(
            "{} debtor(s), {} creditor(s), {} settled, {} transaction(s)\n",
            s.debtor_count, s.creditor_count, s.settled_count, s.transaction_count
        ));

        output
    }
}
