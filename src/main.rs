mod cli;
mod config;
mod convert_cmd;
mod input;
mod logging;
mod now_cmd;
mod watch_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match &cli.command {
        Command::Now => now_cmd::run(),
        Command::ToDate(args) => convert_cmd::run_to_date(args, &config),
        Command::ToWeek(args) => convert_cmd::run_to_week(args),
        Command::Watch(args) => watch_cmd::run(args, &config),
    }
}
