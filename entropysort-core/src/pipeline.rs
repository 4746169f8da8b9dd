// entropysort-core/src/pipeline.rs
//! The segment → score → stable sort → emit pipeline.
//!
//! `run_pipeline` buffers every piece before writing anything, because the
//! order of the first emitted piece depends on the score of the last one.
//! Errors are returned to the caller; nothing here exits the process.
//!
//! License: MIT OR APACHE 2.0

use std::io::{BufRead, Write};

use log::{debug, info};

use entropysort_entropy::{compute_stats, EntropyStats};

use crate::config::PipelineConfig;
use crate::errors::EntropySortError;
use crate::piece::TextPiece;

/// What a completed run processed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineReport {
    /// Number of pieces emitted.
    pub pieces: usize,
    /// Mean and spread of the piece scores.
    pub stats: EntropyStats,
}

/// Runs the full pipeline from `reader` to `writer`.
///
/// On a read error nothing is written; on success every piece is written
/// exactly once, followed by `\n`, in ascending score order.
pub fn run_pipeline<R, W>(
    config: &PipelineConfig,
    reader: R,
    writer: W,
) -> Result<PipelineReport, EntropySortError>
where
    R: BufRead,
    W: Write,
{
    info!("Starting entropy sort using {} segmentation.", config.segmentation);

    let mut pieces = config.segmentation.segment(reader)?;
    debug!("Segmented input into {} pieces.", pieces.len());

    let scores: Vec<f64> = pieces.iter().map(TextPiece::score).collect();
    let stats = compute_stats(&scores);
    debug!(
        "Entropy scores: min {:.4}, max {:.4}, mean {:.4}, std dev {:.4} bits.",
        stats.min, stats.max, stats.mean, stats.std_dev
    );

    sort_pieces(&mut pieces);
    emit_pieces(&pieces, writer)?;

    info!("Entropy sort completed.");
    Ok(PipelineReport {
        pieces: pieces.len(),
        stats,
    })
}

/// Sorts pieces by ascending score. Stable: ties keep their input order.
pub fn sort_pieces(pieces: &mut [TextPiece]) {
    pieces.sort_by(|a, b| a.score().total_cmp(&b.score()));
}

/// Writes each piece's content on its own line, then flushes.
pub fn emit_pieces<W: Write>(pieces: &[TextPiece], mut writer: W) -> Result<(), EntropySortError> {
    for piece in pieces {
        writeln!(writer, "{}", piece.content()).map_err(EntropySortError::Write)?;
    }
    writer.flush().map_err(EntropySortError::Write)
}
