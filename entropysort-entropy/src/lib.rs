// entropysort-entropy/src/lib.rs
#![no_std]

extern crate alloc;

pub mod entropy;
pub mod statistics;

pub use entropy::shannon_entropy;
pub use statistics::{compute_stats, EntropyStats};

/// Common type definitions
pub type EntropyScore = f64;
