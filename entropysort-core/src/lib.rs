// entropysort-core/src/lib.rs
//! # entropysort Core Library
//!
//! `entropysort-core` holds the platform-independent logic of entropysort:
//! it splits a byte stream into text pieces, scores every piece by the
//! Shannon entropy of its trimmed content, stably sorts the pieces by
//! ascending score and writes them out one per line.
//!
//! The library performs no process-level side effects. Every failure is
//! returned as an [`EntropySortError`] so the caller decides how to report it.
//!
//! ## Modules
//!
//! * `piece`: Defines [`TextPiece`], the scored unit of text.
//! * `segmenter`: Line and fixed-size chunk segmentation strategies.
//! * `pipeline`: Scoring, stable sorting and emission.
//! * `config`: [`PipelineConfig`], the explicit per-mode configuration.
//! * `headless`: One-shot sorting of in-memory strings.
//! * `errors`: The [`EntropySortError`] type.
//!
//! ## Usage Example
//!
//! ```rust
//! use entropysort_core::{headless_sort_string, Segmentation};
//!
//! let sorted = headless_sort_string("abcd\nab\naaaa\n", Segmentation::Line).unwrap();
//! assert_eq!(sorted, "aaaa\nab\nabcd\n");
//! ```

pub mod config;
pub mod errors;
pub mod headless;
pub mod piece;
pub mod pipeline;
pub mod segmenter;

pub use config::PipelineConfig;
pub use errors::EntropySortError;
pub use headless::headless_sort_string;
pub use piece::TextPiece;
pub use pipeline::{emit_pieces, run_pipeline, sort_pieces, PipelineReport};
pub use segmenter::{segment_chunks, segment_lines, Segmentation, DEFAULT_CHUNK_SIZE};

pub use entropysort_entropy::{shannon_entropy, EntropyScore, EntropyStats};
