use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::commands::CommandError;
use crate::parser::ParseError;
use crate::process::ProcessError;

/// The only message a user ever sees, whatever went wrong.
pub const ERROR_MESSAGE: &str = "An error has occurred\n";

/// Writes the generic error message to standard error.
pub fn report_error() {
    let mut stderr = std::io::stderr().lock();
    let _ = stderr.write_all(ERROR_MESSAGE.as_bytes());
    let _ = stderr.flush();
}

/// Fatal errors: anything that stops the interpreter as a whole.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("expected at most one script argument, got {0}")]
    Usage(usize),
    #[error("cannot open script {path}: {source}")]
    ScriptOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors confined to a single `&`-delimited segment of a line.
#[derive(Debug, Error)]
pub enum SegmentError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Process(#[from] ProcessError),
}
