//! YAML Export functionality
//!
//! Exports a group balance report to YAML for human reading.

use std::io::Write;

use crate::error::{SplitError, SplitResult};
use crate::export::json::ReportExport;
use crate::reports::GroupBalanceReport;

fn export_err(e: impl std::fmt::Display) -> SplitError {
    SplitError::Export(e.to_string())
}

/// Export a report to YAML, preceded by a comment header
pub fn export_report_yaml<W: Write>(
    report: &GroupBalanceReport,
    writer: &mut W,
) -> SplitResult<()> {
    let export = ReportExport::new(report);

    writeln!(writer, "# groupsplit balance report: {}", report.group.name).map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.generated_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(export_err)?;

    Ok(())
}
