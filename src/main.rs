use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use groupsplit_cli::cli::{
    handle_balances_command, handle_report_command, handle_settle_command,
    handle_validate_command, BalancesArgs, ReportArgs, SettleArgs, ValidateArgs,
};
use groupsplit_cli::config::{GroupsplitPaths, Settings};

#[derive(Parser)]
#[command(
    name = "groupsplit",
    version,
    about = "Shared group expense balances and settlement plans",
    long_about = "groupsplit reads a snapshot of a group's members and expenses, \
                  works out who owes whom, and proposes the fewest payments \
                  needed to settle everyone up."
)]
struct Cli {
    /// Log filter, e.g. "debug" or "groupsplit_cli=trace"
    #[arg(long, global = true, env = "GROUPSPLIT_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show paid, owed and net totals per member
    Balances(BalancesArgs),

    /// Show the payments that settle the group
    #[command(alias = "settlement")]
    Settle(SettleArgs),

    /// Generate the full group balance report
    Report(ReportArgs),

    /// Check a snapshot for consistency
    Validate(ValidateArgs),

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = GroupsplitPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_tracing(cli.log_level.as_deref().unwrap_or(&settings.log_level));

    match cli.command {
        Some(Commands::Balances(args)) => handle_balances_command(&settings, args)?,
        Some(Commands::Settle(args)) => handle_settle_command(&settings, args)?,
        Some(Commands::Report(args)) => handle_report_command(&settings, args)?,
        Some(Commands::Validate(args)) => handle_validate_command(args)?,
        Some(Commands::Init) => {
            println!("Initializing groupsplit at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Settings written to {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("groupsplit Configuration");
            println!("========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Initialized:       {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Tolerance:       {}", settings.tolerance);
            println!("  Log level:       {}", settings.log_level);
            println!("  Default format:  {}", settings.default_format);
        }
        None => {
            println!("groupsplit - shared expense balances");
            println!();
            println!("Run 'groupsplit --help' for usage information.");
        }
    }

    Ok(())
}
