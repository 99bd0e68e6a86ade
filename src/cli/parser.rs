use crate::db::import::ImportTable;
use crate::export::{ExportFormat, ExportTarget};
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchroll
/// Reconciles clock punches and computes attendance and leave totals per pay period
#[derive(Parser)]
#[command(
    name = "punchroll",
    version = env!("CARGO_PKG_VERSION"),
    about = "Punch reconciliation, attendance validation and leave accounting per pay period",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config-file", value_name = "FILE")]
    pub config_file: Option<String>,

    /// Processing date (YYYY-MM-DD, default today); data is read up to the day before
    #[arg(global = true, long = "date")]
    pub date: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, validate or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate period constants, weekdays and durations")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "limit", default_value_t = 50, help = "Number of rows to print")]
        limit: usize,
    },

    /// Load a CSV file into one of the database tables
    Import {
        #[arg(long, value_enum)]
        table: ImportTable,

        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Show the pay periods active for the processing date
    Periods,

    /// List punches of days that fail an integrity rule
    Check {
        #[arg(long, value_name = "YYYY-MM-DD", help = "Only punches of this day")]
        day: Option<String>,

        #[arg(long, value_enum, requires = "file")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print punctuality and leave totals per pay period
    Report {
        #[arg(long, value_name = "LABEL", help = "Only this period (e.g. weekly-2)")]
        period: Option<String>,
    },

    /// Export run results
    Export {
        #[arg(long, value_enum)]
        what: ExportTarget,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
