use std::io;

use log::{debug, warn};

use super::ProcessError;

/// A launched child process, identified by its pid until it is reaped.
#[derive(Debug, PartialEq, Eq)]
pub struct ProcessHandle {
    pid: libc::pid_t,
}

impl ProcessHandle {
    pub(crate) fn new(pid: libc::pid_t) -> Self {
        Self { pid }
    }

    pub fn pid(&self) -> libc::pid_t {
        self.pid
    }

    /// Blocks until the process terminates and returns its exit code, or
    /// `None` if it was killed by a signal.
    pub fn wait(self) -> Result<Option<i32>, ProcessError> {
        let mut status: libc::c_int = 0;
        loop {
            if unsafe { libc::waitpid(self.pid, &mut status, 0) } >= 0 {
                break;
            }
            let err = io::Error::last_os_error();
            if err.kind() != io::ErrorKind::Interrupted {
                return Err(ProcessError::Wait(err));
            }
        }

        if libc::WIFEXITED(status) {
            Ok(Some(libc::WEXITSTATUS(status)))
        } else {
            Ok(None)
        }
    }
}

/// The per-line barrier: reaps every handle, in any order of completion.
/// Exit statuses are discarded.
pub fn wait_all(handles: Vec<ProcessHandle>) {
    let count = handles.len();
    for handle in handles {
        let pid = handle.pid();
        if let Err(e) = handle.wait() {
            warn!("pid {}: {}", pid, e);
        }
    }
    if count > 0 {
        debug!("barrier cleared for {} process(es)", count);
    }
}
