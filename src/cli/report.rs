//! CLI command for the group balance report
//!
//! Prints the report or writes it in one of the export formats.

use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

use super::load_group;
use crate::config::{OutputFormat, Settings};
use crate::error::{SplitError, SplitResult};
use crate::export::{export_report_json, export_report_yaml, export_settlements_csv};
use crate::reports::GroupBalanceReport;
use crate::storage::write_atomic;

/// Arguments for `groupsplit report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Group snapshot file (.json, .yaml or .yml)
    pub file: PathBuf,

    /// Reject snapshots that fail validation
    #[arg(long)]
    pub strict: bool,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `groupsplit report`
pub fn handle_report_command(settings: &Settings, args: ReportArgs) -> SplitResult<()> {
    let snapshot = load_group(&args.file, args.strict)?;
    let report = GroupBalanceReport::generate(&snapshot, settings);
    let format = args.format.unwrap_or(settings.default_format);

    match args.output {
        Some(path) => {
            write_atomic(&path, |writer| {
                write_report(&report, format, &settings.currency_symbol, writer)
            })?;
            println!("Report exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_report(&report, format, &settings.currency_symbol, &mut handle)?;
        }
    }

    Ok(())
}

fn write_report<W: Write>(
    report: &GroupBalanceReport,
    format: OutputFormat,
    symbol: &str,
    writer: &mut W,
) -> SplitResult<()> {
    match format {
        OutputFormat::Table => writeln!(writer, "{}", report.format_terminal(symbol))
            .map_err(|e| SplitError::Export(e.to_string())),
        OutputFormat::Json => export_report_json(report, writer, true),
        OutputFormat::Yaml => export_report_yaml(report, writer),
        OutputFormat::Csv => export_settlements_csv(report, writer),
    }
}
