//! CSV Export functionality
//!
//! Exports a settlement plan to CSV, one row per transaction.

use std::io::Write;

use crate::error::{SplitError, SplitResult};
use crate::reports::GroupBalanceReport;

/// Export the report's settlement plan to CSV
pub fn export_settlements_csv<W: Write>(report: &GroupBalanceReport, writer: W) -> SplitResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Step", "From", "From Email", "To", "To Email", "Amount"])?;

    for (i, txn) in report.transactions.iter().enumerate() {
        csv_writer.write_record([
            (i + 1).to_string(),
            txn.from.name.clone(),
            txn.from.email.clone(),
            txn.to.name.clone(),
            txn.to.email.clone(),
            txn.amount.to_string(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| SplitError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Expense, Group, GroupSnapshot, Member, Share, SplitType};

    #[test]
    fn test_export_settlements_csv() {
        let a = Member::new("Alice", "alice@example.com");
        let b = Member::new("Bob, Jr.", "bob@example.com");
        let c = Member::new("Carol", "carol@example.com");
        let dinner = Expense::new("Dinner", 90.0, SplitType::Equal)
            .paid_by(a.id, 90.0)
            .with_shares(vec![
                Share::new(a.id, 100.0 / 3.0, 30.0),
                Share::new(b.id, 100.0 / 3.0, 30.0),
                Share::new(c.id, 100.0 / 3.0, 30.0),
            ]);
        let snapshot = GroupSnapshot::new(Group::new("Trip"), vec![a, b, c], vec![dinner]);
        let report = GroupBalanceReport::generate(&snapshot, &Settings::default());

        let mut buffer = Vec::new();
        export_settlements_csv(&report, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Step,From,From Email,To,To Email,Amount");
        assert_eq!(
            lines[1],
            "1,\"Bob, Jr.\",bob@example.com,Alice,alice@example.com,30.00"
        );
        assert!(lines[2].starts_with("2,Carol,"));
    }
}
