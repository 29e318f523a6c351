//! Command-line interface for `fixit_rust`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::logging;

/// `fixit_rust` (fx) - Campus facility issue tracker.
#[derive(Parser, Debug)]
#[command(name = "fx")]
#[command(
    author,
    version,
    about = "Campus facility issue tracker (JSON store + SLA analytics)",
    long_about = None,
    after_help = "State lives in a small JSON store on disk; no daemon, no database."
)]
pub struct Cli {
    /// Output JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory for the durable store
    #[arg(long, global = true, env = "FIXIT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a session as the given user
    Login(LoginArgs),

    /// End the active session
    Logout,

    /// Show the active session
    Whoami,

    /// Report a new facility issue
    Report(ReportArgs),

    /// List issues
    List(ListArgs),

    /// Show one issue with its audit timeline
    Show(ShowArgs),

    /// Change an issue's status
    Status(StatusArgs),

    /// Delete an issue (hard delete)
    Delete(DeleteArgs),

    /// Look up an issue by tracking code (no sign-in needed)
    Track(TrackArgs),

    /// Operational dashboard: critical, over-SLA, tasks by building
    Dashboard,

    /// Show version information
    Version,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username (seeded accounts: student, staff, admin)
    pub username: String,

    /// Role for new usernames; ignored for seeded accounts
    #[arg(long, default_value = "student")]
    pub role: String,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Issue title
    #[arg(short, long)]
    pub title: String,

    /// What is wrong
    #[arg(short, long)]
    pub description: String,

    /// Where it is, e.g. "Building 1, Room 301"
    #[arg(short, long)]
    pub location: String,

    /// Category: facility, electricity, internet, equipment, traffic, other
    #[arg(short, long, default_value = "facility")]
    pub category: String,

    /// Photo URL (stored as an opaque reference)
    #[arg(long)]
    pub image: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by status (pending, in_progress, done)
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by category
    #[arg(long)]
    pub category: Option<String>,

    /// Case-insensitive search over title and location
    #[arg(long)]
    pub search: Option<String>,

    /// Show at most this many issues
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Issue id
    pub id: String,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Issue id
    pub id: String,

    /// New status (pending, in_progress, done)
    pub status: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Issue id
    pub id: String,
}

#[derive(Args, Debug)]
pub struct TrackArgs {
    /// Tracking code, e.g. PSU-2026-123456 (case-insensitive)
    pub code: String,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let config = Config::resolve(cli.data_dir)?;
    tracing::debug!(data_dir = %config.data_dir.display(), "resolved configuration");

    match cli.command {
        Some(Commands::Login(args)) => commands::login::execute(&config, &args, cli.json),
        Some(Commands::Logout) => commands::logout::execute(&config, cli.json),
        Some(Commands::Whoami) => commands::whoami::execute(&config, cli.json),
        Some(Commands::Report(args)) => commands::report::execute(&config, &args, cli.json),
        Some(Commands::List(args)) => commands::list::execute(&config, &args, cli.json),
        Some(Commands::Show(args)) => commands::show::execute(&config, &args, cli.json),
        Some(Commands::Status(args)) => commands::status::execute(&config, &args, cli.json),
        Some(Commands::Delete(args)) => commands::delete::execute(&config, &args, cli.json),
        Some(Commands::Track(args)) => commands::track::execute(&config, &args, cli.json),
        Some(Commands::Dashboard) => commands::dashboard::execute(&config, cli.json),
        Some(Commands::Version) => {
            println!("fx {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            println!("fx - campus facility issue tracker. Use --help for usage.");
            Ok(())
        }
    }
}
