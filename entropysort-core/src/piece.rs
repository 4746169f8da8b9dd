// entropysort-core/src/piece.rs
//! Defines `TextPiece`, the unit that is segmented, scored, sorted and emitted.

use entropysort_entropy::{shannon_entropy, EntropyScore};

/// A contiguous piece of input text together with its entropy score.
///
/// The score is computed once, in [`TextPiece::new`], from the
/// whitespace-trimmed view of the content. The content itself is kept
/// exactly as segmented and is what gets emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPiece {
    content: String,
    score: EntropyScore,
}

impl TextPiece {
    /// Creates a piece and scores it.
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let score = shannon_entropy(content.trim());
        Self { content, score }
    }

    /// The original, untrimmed text of the piece.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Shannon entropy of the trimmed content, in bits per code point.
    pub fn score(&self) -> EntropyScore {
        self.score
    }
}
