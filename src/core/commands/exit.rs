use super::{Command, CommandError, Flow};
use crate::core::state::ShellState;

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, args: &[String], _state: &mut ShellState) -> Result<Flow, CommandError> {
        if !args.is_empty() {
            return Err(CommandError::InvalidArguments { command: "exit" });
        }
        Ok(Flow::Exit)
    }
}
