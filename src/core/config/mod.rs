use crate::parser::MAX_TOKENS;
use crate::path::SearchPath;

pub const DEFAULT_PROMPT: &str = "wish> ";
pub const DEFAULT_SEARCH_PATH: &[&str] = &["/bin"];

/// Startup settings for a [`Shell`](crate::shell::Shell).
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub prompt: String,
    pub search_path: SearchPath,
    pub max_tokens: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            search_path: SearchPath::new(DEFAULT_SEARCH_PATH.iter().copied()),
            max_tokens: MAX_TOKENS,
        }
    }
}
