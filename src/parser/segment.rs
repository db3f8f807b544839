use super::ParseError;

/// Separates commands that run concurrently on one line.
pub const SEPARATOR: char = '&';

/// Splits a line into its `&`-delimited segments, left to right.
///
/// Every piece is kept: one that is empty after trimming becomes an
/// `Err(ParseError::EmptySegment)` in its position, so callers can report it
/// and still run the segments around it.
pub fn split_segments(line: &str) -> Vec<Result<&str, ParseError>> {
    line.split(SEPARATOR)
        .map(|piece| {
            let piece = piece.trim();
            if piece.is_empty() {
                Err(ParseError::EmptySegment)
            } else {
                Ok(piece)
            }
        })
        .collect()
}
