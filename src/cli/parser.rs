use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimecard
#[derive(Parser, Debug)]
#[command(
    name = "rtimecard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Personal time card: clock in/out, manual entries, monthly history, statistics and PDF reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user (overrides `user` in the configuration)
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Test mode: `init` does not write the configuration file
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Clock in (starts the day's session)
    In {
        #[arg(long = "date", help = "Day of the session (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long = "at", help = "Clock-in time (HH:MM, default: now)")]
        at: Option<String>,
    },

    /// Clock out (closes the day's session)
    Out {
        #[arg(long = "date", help = "Day of the session (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long = "at", help = "Clock-out time (HH:MM, default: now)")]
        at: Option<String>,
    },

    /// Register or revise a day manually
    Add {
        /// Day of the session (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        start: String,

        #[arg(long = "out", help = "Clock-out time (HH:MM)")]
        end: Option<String>,
    },

    /// Delete the session of a day
    Del {
        date: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show today's session
    Today,

    /// List a month's sessions, newest first
    List {
        #[arg(long, short, help = "Month to list (YYYY-MM, default: current month)")]
        month: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long = "per-page", help = "Rows per page (default from configuration)")]
        per_page: Option<usize>,
    },

    /// Monthly statistics
    Stats {
        #[arg(long, short, help = "Month (YYYY-MM, default: current month)")]
        month: Option<String>,
    },

    /// Export a month's report
    Export {
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, help = "Month (YYYY-MM, default: current month)")]
        month: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
}
