use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Weektray week-number clock.
#[derive(Parser)]
#[command(
    name = "weektray",
    version,
    about = "Report the current week number and convert between weeks and dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the current week number.
    Now,
    /// Convert a week number to the Monday date starting that week.
    ToDate(ToDateArgs),
    /// Convert a calendar date to its week number.
    ToWeek(ToWeekArgs),
    /// Print the week number now and re-check it periodically.
    Watch(WatchArgs),
}

/// Arguments for the `to-date` subcommand.
#[derive(clap::Args)]
pub struct ToDateArgs {
    /// Week number as free text (1..=53).
    pub week: String,

    /// Reference year whose week numbering is used (defaults to the
    /// current year).
    #[arg(short, long)]
    pub year: Option<i32>,
}

/// Arguments for the `to-week` subcommand.
#[derive(clap::Args)]
pub struct ToWeekArgs {
    /// Date as free text in YYYY-MM-DD form.
    pub date: String,
}

/// Arguments for the `watch` subcommand.
#[derive(clap::Args)]
pub struct WatchArgs {
    /// Seconds between re-checks (overrides config; default 3600).
    #[arg(short, long)]
    pub interval: Option<u64>,
}
