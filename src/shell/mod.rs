use log::debug;

mod executor;

use crate::{
    core::{
        commands::{Builtins, Flow},
        config::ShellConfig,
        state::ShellState,
    },
    error::ShellError,
    input::LineSource,
    path::PathResolver,
};

/// The interpreter: reads lines, runs each one, and waits for everything a
/// line launched before reading the next.
pub struct Shell {
    pub(crate) config: ShellConfig,
    pub(crate) state: ShellState,
    pub(crate) builtins: Builtins,
    pub(crate) resolver: PathResolver,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        let state = ShellState::new(config.search_path.clone());

        Shell {
            config,
            state,
            builtins: Builtins::new(),
            resolver: PathResolver::new(),
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn prompt(&self) -> &str {
        &self.config.prompt
    }

    /// Runs until end of input or `exit`.
    pub fn run(&mut self, source: &mut dyn LineSource) -> Result<(), ShellError> {
        while let Some(line) = source.next_line()? {
            if self.execute_line(&line) == Flow::Exit {
                debug!("exit requested");
                return Ok(());
            }
        }
        debug!("end of input");
        Ok(())
    }
}
