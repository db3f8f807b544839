use super::ParseError;

/// Sends a launched program's output to a file.
pub const REDIRECT: char = '>';

/// Upper bound on the number of arguments taken from one segment.
pub const MAX_TOKENS: usize = 512;

/// One parsed command: its argument vector and an optional output file.
///
/// Only built by [`parse_segment`], which never yields an empty `argv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    argv: Vec<String>,
    redirect: Option<String>,
}

impl Segment {
    /// Program or built-in name.
    pub fn name(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn redirect(&self) -> Option<&str> {
        self.redirect.as_deref()
    }
}

/// Parses a single segment of the form `cmd args... [> file]`.
///
/// Words past `max_tokens` are dropped without error.
pub fn parse_segment(text: &str, max_tokens: usize) -> Result<Segment, ParseError> {
    let text = text.trim();
    if text.starts_with(REDIRECT) {
        return Err(ParseError::MissingCommand);
    }

    let (command, redirect) = match text.split_once(REDIRECT) {
        Some((left, right)) => {
            if right.contains(REDIRECT) {
                return Err(ParseError::MultipleRedirects);
            }
            (left, Some(parse_target(right)?))
        }
        None => (text, None),
    };

    let argv: Vec<String> = command
        .split_whitespace()
        .take(max_tokens)
        .map(String::from)
        .collect();
    if argv.is_empty() {
        return Err(ParseError::MissingCommand);
    }

    Ok(Segment { argv, redirect })
}

fn parse_target(text: &str) -> Result<String, ParseError> {
    let words: Vec<&str> = text.split_whitespace().collect();
    match words.as_slice() {
        [target] => Ok((*target).to_string()),
        other => Err(ParseError::BadRedirectTarget(other.len())),
    }
}
