use std::ffi::{CStr, CString};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::c_char;
use log::debug;

use super::{ProcessError, ProcessHandle};
use crate::error::ERROR_MESSAGE;

const REDIRECT_MODE: libc::c_uint = 0o666;

/// Starts `program` in a new process and returns without waiting for it.
///
/// `argv` is passed through untouched, so `argv[0]` stays the name the user
/// typed rather than the resolved path. When `redirect` is set the child
/// truncates (or creates) that file and points both stdout and stderr at it
/// before replacing its image. Failures after the fork happen in the child:
/// it prints the error message and exits with status 1.
pub fn spawn(
    program: &Path,
    argv: &[String],
    redirect: Option<&str>,
) -> Result<ProcessHandle, ProcessError> {
    // Everything the child touches is allocated up front; after fork it only
    // makes raw syscalls.
    let program = CString::new(program.as_os_str().as_bytes())?;
    let args = argv
        .iter()
        .map(|arg| CString::new(arg.as_str()))
        .collect::<Result<Vec<_>, _>>()?;
    let mut arg_ptrs: Vec<*const c_char> = args.iter().map(|arg| arg.as_ptr()).collect();
    arg_ptrs.push(std::ptr::null());
    let target = redirect.map(CString::new).transpose()?;

    match unsafe { libc::fork() } {
        -1 => Err(ProcessError::Fork(std::io::Error::last_os_error())),
        0 => unsafe { exec_child(&program, &arg_ptrs, target.as_deref()) },
        pid => {
            debug!("launched {:?} as pid {}", program, pid);
            Ok(ProcessHandle::new(pid))
        }
    }
}

/// Runs in the forked child; never returns.
unsafe fn exec_child(program: &CStr, argv: &[*const c_char], target: Option<&CStr>) -> ! {
    // The Rust runtime ignores SIGPIPE, and ignored signals survive execv.
    libc::signal(libc::SIGPIPE, libc::SIG_DFL);

    if let Some(target) = target {
        let fd = libc::open(
            target.as_ptr(),
            libc::O_CREAT | libc::O_WRONLY | libc::O_TRUNC,
            REDIRECT_MODE,
        );
        if fd < 0 {
            child_fail();
        }
        if libc::dup2(fd, libc::STDOUT_FILENO) < 0 || libc::dup2(fd, libc::STDERR_FILENO) < 0 {
            child_fail();
        }
        libc::close(fd);
    }

    libc::execv(program.as_ptr(), argv.as_ptr());
    child_fail()
}

unsafe fn child_fail() -> ! {
    libc::write(
        libc::STDERR_FILENO,
        ERROR_MESSAGE.as_ptr().cast(),
        ERROR_MESSAGE.len(),
    );
    libc::_exit(1)
}
