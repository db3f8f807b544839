use crate::path::SearchPath;

/// Long-lived interpreter state. The working directory lives in the process
/// itself; only the search path is kept here.
///
/// Mutated only by built-ins, which run between launches on the single
/// control thread.
#[derive(Debug, Clone, Default)]
pub struct ShellState {
    pub search_path: SearchPath,
}

impl ShellState {
    pub fn new(search_path: SearchPath) -> Self {
        Self { search_path }
    }
}
