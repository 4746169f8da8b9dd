//! Sort command implementation shared by the `line` and `chunk` modes.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use entropysort_core::{run_pipeline, PipelineConfig, PipelineReport};

use crate::cli::Commands;

/// Options for a single sort run.
#[derive(Debug, Clone, Default)]
pub struct SortOptions {
    pub config: PipelineConfig,
    pub input_file: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
}

impl SortOptions {
    pub fn from_command(command: &Commands) -> Self {
        let args = command.args();
        Self {
            config: command.pipeline_config(),
            input_file: args.input_file.clone(),
            output_path: args.output.clone(),
        }
    }
}

/// The main operation runner for the entropysort CLI.
///
/// Output only appears once the whole input has been read and sorted; a read
/// failure leaves stdout untouched and never creates the output file.
pub fn run_sort(opts: SortOptions) -> Result<PipelineReport> {
    info!("Starting entropysort operation.");

    let reader = open_input(&opts)?;

    let report = match &opts.output_path {
        Some(path) => {
            let mut buffer = Vec::new();
            let report = run_pipeline(&opts.config, reader, &mut buffer)
                .context("Entropy sort failed")?;
            debug!("Writing sorted output to file: {}", path.display());
            fs::write(path, &buffer)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            report
        }
        None => {
            let stdout = io::stdout();
            run_pipeline(&opts.config, reader, stdout.lock()).context("Entropy sort failed")?
        }
    };

    info!("entropysort operation completed ({} pieces).", report.pieces);
    Ok(report)
}

fn open_input(opts: &SortOptions) -> Result<Box<dyn BufRead>> {
    match &opts.input_file {
        Some(path) => {
            debug!("Reading input from file: {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            debug!("Reading input from stdin.");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}
