use std::ffi::NulError;

use thiserror::Error;

pub mod launcher;
pub mod wait;

pub use launcher::spawn;
pub use wait::{wait_all, ProcessHandle};

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("command not found: {0}")]
    NotFound(String),
    #[error("argument contains a NUL byte")]
    InvalidArgument(#[from] NulError),
    #[error("fork failed: {0}")]
    Fork(std::io::Error),
    #[error("wait failed: {0}")]
    Wait(std::io::Error),
}
