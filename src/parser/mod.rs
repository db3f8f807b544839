mod command;
mod segment;

pub use command::{parse_segment, Segment, MAX_TOKENS, REDIRECT};
pub use segment::{split_segments, SEPARATOR};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command between separators")]
    EmptySegment,
    #[error("redirection without a command")]
    MissingCommand,
    #[error("more than one redirection")]
    MultipleRedirects,
    #[error("redirection needs exactly one target, got {0}")]
    BadRedirectTarget(usize),
}
