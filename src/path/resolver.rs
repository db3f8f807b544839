use std::ffi::CString;
use std::path::PathBuf;

use log::debug;

/// Ordered directories searched for bare program names.
///
/// Only ever replaced as a whole. An empty search path is valid and means no
/// external command can be found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<String>,
}

impl SearchPath {
    pub fn new<I, S>(dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn replace(&mut self, dirs: Vec<String>) {
        self.dirs = dirs;
    }

    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PathResolver;

impl PathResolver {
    pub fn new() -> Self {
        Self
    }

    /// Returns `dir/name` for the first directory, in order, where that file
    /// exists and is executable by us.
    pub fn resolve(&self, search_path: &SearchPath, name: &str) -> Option<PathBuf> {
        let found = search_path
            .dirs()
            .iter()
            .map(|dir| format!("{}/{}", dir, name))
            .find(|candidate| is_executable(candidate))
            .map(PathBuf::from);
        debug!("resolve {:?} -> {:?}", name, found);
        found
    }
}

fn is_executable(path: &str) -> bool {
    match CString::new(path) {
        Ok(path) => unsafe { libc::access(path.as_ptr(), libc::X_OK) == 0 },
        Err(_) => false,
    }
}
