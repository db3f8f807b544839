use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::ShellError;

/// How the interpreter was started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments: prompt and read standard input.
    Interactive,
    /// One argument: run the named script without prompting.
    Batch(PathBuf),
}

impl Invocation {
    /// `args` excludes the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ShellError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        match args.len() {
            0 => Ok(Invocation::Interactive),
            1 => Ok(Invocation::Batch(PathBuf::from(args.remove(0)))),
            n => Err(ShellError::Usage(n)),
        }
    }
}
