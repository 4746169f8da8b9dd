// entropysort-core/src/config.rs
//! Pipeline configuration.
//!
//! Each CLI mode maps onto one `PipelineConfig` value; there is no global
//! registry of modes.
//!
//! License: MIT OR APACHE 2.0

use crate::segmenter::{Segmentation, DEFAULT_CHUNK_SIZE};

/// Everything `run_pipeline` needs to know about how to process a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineConfig {
    pub segmentation: Segmentation,
}

impl PipelineConfig {
    /// Line mode: one piece per input line.
    pub fn lines() -> Self {
        Self { segmentation: Segmentation::Line }
    }

    /// Chunk mode: one piece per 128-byte chunk.
    pub fn chunks() -> Self {
        Self {
            segmentation: Segmentation::Chunk { size: DEFAULT_CHUNK_SIZE },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_configs() {
        assert_eq!(PipelineConfig::default(), PipelineConfig::lines());
        assert_eq!(
            PipelineConfig::chunks().segmentation,
            Segmentation::Chunk { size: 128 }
        );
    }
}
