use std::collections::BTreeMap;

use thiserror::Error;

mod cd;
mod exit;
mod path;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use path::PathCommand;

use crate::core::state::ShellState;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{command}: invalid arguments")]
    InvalidArguments { command: &'static str },
    #[error("cd: {path}: {source}")]
    ChangeDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// What the interpreter does after a built-in returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub trait Command {
    /// `args` excludes the command name itself.
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Flow, CommandError>;
}

#[derive(Clone)]
pub enum CommandType {
    Exit(ExitCommand),
    Cd(CdCommand),
    Path(PathCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Flow, CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(args, state),
            CommandType::Cd(cmd) => cmd.execute(args, state),
            CommandType::Path(cmd) => cmd.execute(args, state),
        }
    }
}

/// Commands run inside the interpreter itself rather than in a child.
#[derive(Clone)]
pub struct Builtins {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for Builtins {
    fn default() -> Self {
        Self::new()
    }
}

impl Builtins {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("path", CommandType::Path(PathCommand::new()));
        Self { commands }
    }

    pub fn get(&self, name: &str) -> Option<&CommandType> {
        self.commands.get(name)
    }
}
