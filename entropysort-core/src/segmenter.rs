// entropysort-core/src/segmenter.rs
//! Segmentation strategies that turn a byte stream into ordered `TextPiece`s.
//!
//! Two strategies exist: line-based and fixed-size chunk-based. Both consume
//! the entire stream before returning, decode bytes as lossy UTF-8, and fail
//! with [`EntropySortError::Read`] on any read error other than end-of-stream.
//! A failed segmentation returns no pieces at all.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::io::{BufRead, Read};

use log::trace;

use crate::errors::EntropySortError;
use crate::piece::TextPiece;

/// Chunk size used by the `chunk` mode, in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 128;

/// Selects how an input stream is split into pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Segmentation {
    /// One piece per line, terminator excluded.
    #[default]
    Line,
    /// One piece per `size` bytes; the last piece may be shorter.
    Chunk { size: usize },
}

impl Segmentation {
    /// Chunk segmentation with an explicit size. Rejects zero.
    pub fn chunk(size: usize) -> Result<Self, EntropySortError> {
        if size == 0 {
            return Err(EntropySortError::InvalidChunkSize);
        }
        Ok(Segmentation::Chunk { size })
    }

    /// Consumes `reader` to completion and returns its pieces in input order.
    pub fn segment<R: BufRead>(&self, reader: R) -> Result<Vec<TextPiece>, EntropySortError> {
        match *self {
            Segmentation::Line => segment_lines(reader),
            Segmentation::Chunk { size } => segment_chunks(reader, size),
        }
    }
}

impl fmt::Display for Segmentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segmentation::Line => write!(f, "line"),
            Segmentation::Chunk { size } => write!(f, "chunk ({} bytes)", size),
        }
    }
}

/// Splits the stream on `\n`.
///
/// The terminator and a `\r` directly before it are dropped. A final line
/// without a terminator is kept; a trailing terminator does not produce an
/// extra empty piece, so empty input yields no pieces.
pub fn segment_lines<R: BufRead>(mut reader: R) -> Result<Vec<TextPiece>, EntropySortError> {
    let mut pieces = Vec::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(EntropySortError::Read)?;
        if read == 0 {
            break;
        }

        if line.last() == Some(&b'\n') {
            line.pop();
        }
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        trace!("Line piece {}: {} bytes", pieces.len(), line.len());
        pieces.push(TextPiece::new(String::from_utf8_lossy(&line).into_owned()));
    }

    Ok(pieces)
}

/// Splits the stream into pieces of `size` bytes.
///
/// Short reads keep filling the same chunk until `size` bytes arrive or the
/// source reports end-of-stream. A partial chunk does not end segmentation:
/// a terminal may report end-of-stream mid-chunk (Ctrl-D) and still deliver
/// more input, so only a chunk read that yields no bytes stops. Every piece is decoded from a buffer holding
/// only the bytes read for it, so the final chunk is never padded. Multi-byte
/// characters cut by a chunk boundary decode to U+FFFD on both sides.
pub fn segment_chunks<R: Read>(mut reader: R, size: usize) -> Result<Vec<TextPiece>, EntropySortError> {
    if size == 0 {
        return Err(EntropySortError::InvalidChunkSize);
    }

    let mut pieces = Vec::new();

    loop {
        let mut buf = Vec::with_capacity(size);
        let read = reader
            .by_ref()
            .take(size as u64)
            .read_to_end(&mut buf)
            .map_err(EntropySortError::Read)?;
        if read == 0 {
            break;
        }

        trace!("Chunk piece {}: {} bytes", pieces.len(), read);
        pieces.push(TextPiece::new(String::from_utf8_lossy(&buf).into_owned()));
    }

    Ok(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn contents(pieces: &[TextPiece]) -> Vec<&str> {
        pieces.iter().map(TextPiece::content).collect()
    }

    #[test]
    fn test_lines_basic() {
        let pieces = segment_lines(Cursor::new("a\nb\nc")).unwrap();
        assert_eq!(contents(&pieces), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_lines_empty_input_yields_nothing() {
        let pieces = segment_lines(Cursor::new("")).unwrap();
        assert!(pieces.is_empty());
    }

    #[test]
    fn test_lines_trailing_terminator() {
        let pieces = segment_lines(Cursor::new("a\nb\n")).unwrap();
        assert_eq!(contents(&pieces), vec!["a", "b"]);
    }

    #[test]
    fn test_lines_blank_lines_are_pieces() {
        let pieces = segment_lines(Cursor::new("\n\nx\n")).unwrap();
        assert_eq!(contents(&pieces), vec!["", "", "x"]);
    }

    #[test]
    fn test_lines_strip_carriage_return() {
        let pieces = segment_lines(Cursor::new("a\r\nb\r")).unwrap();
        assert_eq!(contents(&pieces), vec!["a", "b"]);
    }

    #[test]
    fn test_lines_keep_surrounding_whitespace() {
        let pieces = segment_lines(Cursor::new("  ab \n")).unwrap();
        assert_eq!(contents(&pieces), vec!["  ab "]);
    }

    #[test]
    fn test_lines_invalid_utf8_is_replaced() {
        let pieces = segment_lines(Cursor::new(vec![b'a', 0xFF, b'\n'])).unwrap();
        assert_eq!(contents(&pieces), vec!["a\u{FFFD}"]);
    }

    #[test]
    fn test_chunks_short_input_is_one_unpadded_piece() {
        let input = "x".repeat(50);
        let pieces = segment_chunks(Cursor::new(input.clone()), DEFAULT_CHUNK_SIZE).unwrap();
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].content(), input);
        assert_eq!(pieces[0].content().len(), 50);
    }

    #[test]
    fn test_chunks_exact_multiple() {
        let input = "y".repeat(256);
        let pieces = segment_chunks(Cursor::new(input), DEFAULT_CHUNK_SIZE).unwrap();
        assert_eq!(pieces.len(), 2);
        assert!(pieces.iter().all(|p| p.content().len() == 128));
    }

    #[test]
    fn test_chunks_final_chunk_is_not_stale() {
        let full = "a".repeat(128);
        let input = format!("{}bc", full);
        let pieces = segment_chunks(Cursor::new(input), DEFAULT_CHUNK_SIZE).unwrap();
        assert_eq!(contents(&pieces), vec![full.as_str(), "bc"]);
    }

    #[test]
    fn test_chunks_keep_newlines() {
        let pieces = segment_chunks(Cursor::new("ab\ncd\n"), 4).unwrap();
        assert_eq!(contents(&pieces), vec!["ab\nc", "d\n"]);
    }

    #[test]
    fn test_chunks_empty_input_yields_nothing() {
        let pieces = segment_chunks(Cursor::new(""), DEFAULT_CHUNK_SIZE).unwrap();
        assert!(pieces.is_empty());
    }

    #[test]
    fn test_chunks_split_multibyte_character() {
        // "é" is 0xC3 0xA9; a 1-byte chunk cuts it in half.
        let pieces = segment_chunks(Cursor::new("é"), 1).unwrap();
        assert_eq!(contents(&pieces), vec!["\u{FFFD}", "\u{FFFD}"]);
    }

    #[test]
    fn test_zero_chunk_size_is_rejected() {
        assert!(matches!(
            segment_chunks(Cursor::new("abc"), 0),
            Err(EntropySortError::InvalidChunkSize)
        ));
        assert!(matches!(Segmentation::chunk(0), Err(EntropySortError::InvalidChunkSize)));
    }

    #[test]
    fn test_segmentation_dispatch() {
        let line = Segmentation::Line.segment(Cursor::new("ab\ncd")).unwrap();
        assert_eq!(contents(&line), vec!["ab", "cd"]);

        let chunk = Segmentation::chunk(3).unwrap().segment(Cursor::new("ab\ncd")).unwrap();
        assert_eq!(contents(&chunk), vec!["ab\n", "cd"]);
    }

    #[test]
    fn test_segmentation_display() {
        assert_eq!(Segmentation::Line.to_string(), "line");
        assert_eq!(Segmentation::Chunk { size: 128 }.to_string(), "chunk (128 bytes)");
    }
}
