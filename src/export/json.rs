//! JSON Export functionality
//!
//! Exports a group balance report to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{SplitError, SplitResult};
use crate::reports::GroupBalanceReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported report document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub generated_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub report: GroupBalanceReport,
}

impl ReportExport {
    pub fn new(report: &GroupBalanceReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            report: report.clone(),
        }
    }
}

/// Export a report to JSON
pub fn export_report_json<W: Write>(
    report: &GroupBalanceReport,
    writer: &mut W,
    pretty: bool,
) -> SplitResult<()> {
    let export = ReportExport::new(report);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| SplitError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| SplitError::Export(e.to_string()))?;
    Ok(())
}
