use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hostrota
#[derive(Parser)]
#[command(
    name = "hostrota",
    version = env!("CARGO_PKG_VERSION"),
    about = "Monthly host rotation: track who watched, who is in danger, and who chooses next",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Import one period's queue from a CSV file (columns: member,highlighted)
    Import {
        /// Period, as YYYY-MM or "October 2026"
        period: String,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Replace the period if already stored")]
        force: bool,
    },

    /// Mark a member as having watched this period's pick
    Green {
        member: String,

        #[arg(long, short, help = "Period to update (default: newest)")]
        period: Option<String>,

        #[arg(long, help = "Remove the mark instead")]
        undo: bool,
    },

    /// Show the queue of a period
    Queue {
        #[arg(long, short, help = "Period to show (default: newest)")]
        period: Option<String>,
    },

    /// Attendance statistics per member
    Stats {
        #[arg(long, value_name = "N", help = "Only the most recent N periods")]
        months: Option<usize>,

        #[arg(long = "include-current", help = "Include the newest (in progress) period")]
        include_current: bool,

        #[arg(long, help = "Show the detail of one member")]
        member: Option<String>,
    },

    /// Compute next period's queue from the newest one and store it
    Advance {
        #[arg(long = "dry-run", help = "Print the new queue without saving it")]
        dry_run: bool,
    },

    /// Export attendance statistics
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_name = "N", help = "Only the most recent N periods")]
        months: Option<usize>,

        #[arg(long = "include-current", help = "Include the newest (in progress) period")]
        include_current: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
