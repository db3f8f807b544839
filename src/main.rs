use std::env;
use std::io::{self, IsTerminal};
use std::process;

use log::error;
use wish::core::config::ShellConfig;
use wish::error::{report_error, ShellError};
use wish::input::{EditorSource, LineSource, ReaderSource};
use wish::invocation::Invocation;
use wish::shell::Shell;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("WISH_LOG", "off")).init();

    if let Err(e) = run() {
        error!("{}", e);
        report_error();
        process::exit(1);
    }
}

fn run() -> Result<(), ShellError> {
    match Invocation::from_args(env::args_os().skip(1))? {
        Invocation::Batch(script) => {
            let mut source = ReaderSource::script(&script)?;
            Shell::new(ShellConfig::default()).run(&mut source)
        }
        Invocation::Interactive => {
            let mut shell = Shell::new(ShellConfig::default());
            let mut source: Box<dyn LineSource> = if io::stdin().is_terminal() {
                Box::new(EditorSource::new(shell.prompt())?)
            } else {
                Box::new(ReaderSource::stdin(shell.prompt()))
            };
            shell.run(source.as_mut())
        }
    }
}
