//! Export module for groupsplit
//!
//! Writes a group balance report in machine-readable formats:
//! - JSON: the full report with schema metadata
//! - YAML: the same document with a comment header
//! - CSV: the settlement plan, spreadsheet-compatible

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_settlements_csv;
pub use json::{export_report_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;
