use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timeclock
/// Multi-user time clock backed by SQLite
#[derive(Parser)]
#[command(
    name = "timeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A multi-user time clock: clock in/out, auto-stop sweeps, and consolidated timesheets on SQLite",
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

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
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

    /// Print the audit log
    Log {
        #[arg(long = "print", help = "Print rows from the audit log table")]
        print: bool,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserCommand,
    },

    /// Record a completed entry directly (both clock times known)
    Add {
        /// Owner of the entry
        username: String,

        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// Clock-in time (HH:MM)
        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        time_in: String,

        /// Clock-out time (HH:MM)
        #[arg(long = "out", help = "Clock-out time (HH:MM)")]
        time_out: String,

        #[arg(long, help = "Where the work happened (free text)")]
        location: Option<String>,
    },

    /// Clock in (closes any session left open first)
    Start {
        username: String,

        #[arg(long, help = "Where the work happens (free text)")]
        location: Option<String>,

        #[arg(long = "now", hide = true)]
        now: Option<String>,
    },

    /// Clock out
    Stop {
        username: String,

        #[arg(long = "now", hide = true)]
        now: Option<String>,
    },

    /// Show all active sessions
    Status {
        #[arg(long = "now", hide = true)]
        now: Option<String>,
    },

    /// Consolidated per-day timesheet for one user
    Report {
        username: String,

        #[arg(long, help = "List raw entries instead of consolidated days")]
        raw: bool,

        #[arg(long, help = "Range start (YYYY-MM-DD), defaults to current month")]
        from: Option<String>,

        #[arg(long, help = "Range end (YYYY-MM-DD), defaults to current month")]
        to: Option<String>,

        #[arg(long, help = "Sort order: latest (default) or oldest")]
        sort: Option<String>,

        #[arg(long, help = "Page number (1-based)")]
        page: Option<usize>,

        #[arg(long = "per-page", help = "Rows per page")]
        per_page: Option<usize>,

        #[arg(long = "now", hide = true)]
        now: Option<String>,
    },

    /// Consolidated team report across all users
    Team {
        #[arg(long, help = "Narrow to one username")]
        user: Option<String>,

        #[arg(long, help = "Range start (YYYY-MM-DD), defaults to current month")]
        from: Option<String>,

        #[arg(long, help = "Range end (YYYY-MM-DD), defaults to current month")]
        to: Option<String>,

        #[arg(long, help = "Sort order: latest (default) or oldest")]
        sort: Option<String>,

        #[arg(long, help = "Page number (1-based)")]
        page: Option<usize>,

        #[arg(long = "per-page", help = "Rows per page")]
        per_page: Option<usize>,

        #[arg(long = "now", hide = true)]
        now: Option<String>,
    },

    /// Stop expired sessions at the daily cutoff
    Sweep {
        #[arg(long, help = "Keep sweeping on the configured interval")]
        watch: bool,

        #[arg(long = "now", hide = true)]
        now: Option<String>,
    },

    /// Export consolidated summaries to a file
    Export {
        #[arg(long, value_enum, help = "Output format")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute output file path")]
        file: String,

        #[arg(long, help = "Range expression: YYYY, YYYY-MM, YYYY-MM-DD or A:B")]
        range: Option<String>,

        #[arg(long, help = "Narrow to one username")]
        user: Option<String>,

        #[arg(long, help = "Overwrite the output file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum UserCommand {
    /// Register a new user
    Add { username: String },

    /// List registered users
    List,
}
