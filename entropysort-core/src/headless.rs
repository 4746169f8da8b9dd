// entropysort-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for running the pipeline over an in-memory string,
//! for callers that already hold their input and want the sorted text back.

use std::io::Cursor;

use crate::config::PipelineConfig;
use crate::errors::EntropySortError;
use crate::pipeline::run_pipeline;
use crate::segmenter::Segmentation;

/// Segments, scores and sorts `input`, returning the emitted text.
///
/// The result is exactly what `run_pipeline` would write: one piece per
/// line, each terminated by `\n`.
pub fn headless_sort_string(input: &str, segmentation: Segmentation) -> Result<String, EntropySortError> {
    let config = PipelineConfig { segmentation };
    let mut output = Vec::with_capacity(input.len() + 1);

    run_pipeline(&config, Cursor::new(input.as_bytes()), &mut output)?;

    Ok(String::from_utf8_lossy(&output).into_owned())
}
