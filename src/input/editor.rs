use rustyline::{error::ReadlineError, DefaultEditor};

use super::LineSource;
use crate::error::ShellError;

/// Interactive mode on a terminal, with line editing.
pub struct EditorSource {
    editor: DefaultEditor,
    prompt: String,
}

impl EditorSource {
    pub fn new(prompt: &str) -> Result<Self, ShellError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            prompt: prompt.to_string(),
        })
    }
}

impl LineSource for EditorSource {
    fn next_line(&mut self) -> Result<Option<String>, ShellError> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => Ok(Some(line)),
            // Ctrl-C abandons the current line only.
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
