use std::{
    fs::File,
    io::{self, BufRead, BufReader, StdinLock, Write},
    path::Path,
};

use super::{strip_line_ending, LineSource};
use crate::error::ShellError;

/// Reads lines from any buffered reader, optionally writing a prompt to
/// stdout before each one.
pub struct ReaderSource<R> {
    reader: R,
    prompt: Option<String>,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R, prompt: Option<String>) -> Self {
        Self { reader, prompt }
    }
}

impl ReaderSource<BufReader<File>> {
    /// Batch mode: lines come from a script file, no prompt.
    pub fn script(path: &Path) -> Result<Self, ShellError> {
        let file = File::open(path).map_err(|source| ShellError::ScriptOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file), None))
    }
}

impl ReaderSource<StdinLock<'static>> {
    /// Interactive mode on a non-terminal stdin.
    pub fn stdin(prompt: &str) -> Self {
        Self::new(io::stdin().lock(), Some(prompt.to_string()))
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    /// Invalid UTF-8 is replaced with U+FFFD rather than rejected, so a
    /// non-UTF-8 word reaches the launched program altered.
    fn next_line(&mut self) -> Result<Option<String>, ShellError> {
        if let Some(prompt) = &self.prompt {
            let mut stdout = io::stdout().lock();
            stdout.write_all(prompt.as_bytes())?;
            stdout.flush()?;
        }

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        strip_line_ending(&mut line);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_reads_lines_until_eof() -> Result<(), ShellError> {
        let mut source = ReaderSource::new(Cursor::new("ls\n\n  cd /tmp \r\nlast"), None);

        assert_eq!(source.next_line()?.as_deref(), Some("ls"));
        assert_eq!(source.next_line()?.as_deref(), Some(""));
        assert_eq!(source.next_line()?.as_deref(), Some("  cd /tmp "));
        assert_eq!(source.next_line()?.as_deref(), Some("last"));
        assert_eq!(source.next_line()?, None);
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_is_replaced() -> Result<(), ShellError> {
        let bytes: &[u8] = b"touch caf\xe9.txt\nls\n";
        let mut source = ReaderSource::new(Cursor::new(bytes), None);

        assert_eq!(source.next_line()?.as_deref(), Some("touch caf\u{FFFD}.txt"));
        assert_eq!(source.next_line()?.as_deref(), Some("ls"));
        Ok(())
    }

    #[test]
    fn test_script_source() -> Result<(), ShellError> {
        let dir = TempDir::new()?;
        let script = dir.path().join("script.sh");
        fs::write(&script, "path /bin\nexit\n")?;

        let mut source = ReaderSource::script(&script)?;
        assert_eq!(source.next_line()?.as_deref(), Some("path /bin"));
        assert_eq!(source.next_line()?.as_deref(), Some("exit"));
        assert_eq!(source.next_line()?, None);
        Ok(())
    }

    #[test]
    fn test_missing_script_fails() {
        let result = ReaderSource::script(Path::new("/nonexistent/script"));
        assert!(matches!(result, Err(ShellError::ScriptOpen { .. })));
    }
}
