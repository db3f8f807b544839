use super::{Command, CommandError, Flow};
use crate::core::state::ShellState;

/// `path dir...`: replaces the search path with the given directories.
#[derive(Clone)]
pub struct PathCommand;

impl Default for PathCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PathCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PathCommand {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Flow, CommandError> {
        state.search_path.replace(args.to_vec());
        Ok(Flow::Continue)
    }
}
