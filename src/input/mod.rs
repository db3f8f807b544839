mod editor;
mod reader;

pub use editor::EditorSource;
pub use reader::ReaderSource;

use crate::error::ShellError;

/// Where command lines come from.
pub trait LineSource {
    /// Next line without its line terminator, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>, ShellError>;
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
