// entropysort/src/main.rs
//! entropysort entry point.
//!
//! Parses the command line, initialises logging and runs the selected sort
//! mode. Errors surface through `anyhow`, which prints them to stderr and
//! exits with a non-zero status.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use entropysort::cli::Cli;
use entropysort::logger;
use entropysort::{run_sort, SortOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    let report = run_sort(SortOptions::from_command(&cli.command))?;
    log::debug!(
        "Sorted {} pieces (mean entropy {:.4} bits).",
        report.pieces,
        report.stats.mean
    );

    Ok(())
}
