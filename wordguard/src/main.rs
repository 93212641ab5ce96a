// wordguard/src/main.rs
//! wordguard entry point.
//!
//! Resolves filter options from the config file and flags, builds the filter
//! once and runs the selected command.

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use wordguard::cli::{Cli, Commands};
use wordguard::commands::{resolve_options, scan};
use wordguard::logger;
use wordguard_core::Filter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if cli.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    let options = resolve_options(cli.config.as_deref(), &cli.filter)?;
    let filter = Filter::new(options).context("Failed to build filter")?;

    match &cli.command {
        Commands::Check(args) => scan::run_check(&filter, args),
        Commands::Sanitize(cmd) => scan::run_sanitize(&filter, cmd),
        Commands::Matches(cmd) => scan::run_matches(&filter, cmd),
    }
}
