use super::{Command, CommandError, Flow};
use crate::core::state::ShellState;
use std::env;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], _state: &mut ShellState) -> Result<Flow, CommandError> {
        let [path] = args else {
            return Err(CommandError::InvalidArguments { command: "cd" });
        };

        env::set_current_dir(path).map_err(|source| CommandError::ChangeDirectory {
            path: path.clone(),
            source,
        })?;
        Ok(Flow::Continue)
    }
}
