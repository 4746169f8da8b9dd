//! errors.rs - Custom error types for the entropysort-core library.
//!
//! A single structured error enum covers every way the pipeline can fail.
//! Entropy scoring and sorting are total, so only I/O at the edges and an
//! unusable chunk size show up here.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All possible error types in the `entropysort-core` library.
///
/// `#[non_exhaustive]` leaves room for new variants without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EntropySortError {
    /// The input source failed for a reason other than a clean end-of-stream.
    #[error("Failed to read input: {0}")]
    Read(#[source] std::io::Error),

    /// The output sink rejected a write or flush.
    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),

    #[error("Chunk size must be greater than zero")]
    InvalidChunkSize,
}
