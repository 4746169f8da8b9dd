// entropysort/src/cli.rs
//! This file defines the command-line interface (CLI) for the entropysort
//! application: the two sorting modes and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use entropysort_core::PipelineConfig;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "entropysort",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sort text by Shannon entropy",
    long_about = "entropysort reads text, splits it into lines or fixed 128-byte chunks, scores each piece by the Shannon entropy of its trimmed content and prints the pieces from lowest to highest entropy. Pieces with equal entropy keep their input order.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// The sorting mode to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `entropysort` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sorts input text by line.
    #[command(about = "Sort input text by line.")]
    Line(SortCommand),

    /// Sorts input text by 128-byte chunk.
    #[command(about = "Sort input text by 128-byte chunk.")]
    Chunk(SortCommand),
}

impl Commands {
    /// The pipeline configuration this mode runs with.
    pub fn pipeline_config(&self) -> PipelineConfig {
        match self {
            Commands::Line(_) => PipelineConfig::lines(),
            Commands::Chunk(_) => PipelineConfig::chunks(),
        }
    }

    pub fn args(&self) -> &SortCommand {
        match self {
            Commands::Line(args) | Commands::Chunk(args) => args,
        }
    }
}

/// Arguments shared by the `line` and `chunk` commands.
#[derive(Parser, Debug, Clone, Default)]
pub struct SortCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write sorted output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,
}
