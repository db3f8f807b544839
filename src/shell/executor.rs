use log::debug;

use super::Shell;
use crate::{
    core::commands::{Command, Flow},
    error::{report_error, SegmentError},
    parser::{parse_segment, split_segments},
    process::{spawn, wait_all, ProcessError, ProcessHandle},
};

impl Shell {
    /// Runs one input line: every `&`-separated segment is started in order,
    /// then the line blocks until all launched processes have exited.
    ///
    /// A failing segment prints the error message and does not affect its
    /// siblings. `exit` returns at once, leaving already-launched siblings
    /// running unwaited.
    pub fn execute_line(&mut self, line: &str) -> Flow {
        let line = line.trim();
        if line.is_empty() {
            return Flow::Continue;
        }

        let mut handles = Vec::new();
        for piece in split_segments(line) {
            let result = piece
                .map_err(SegmentError::from)
                .and_then(|text| self.execute_segment(text, &mut handles));

            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    debug!("exit with {} sibling(s) not waited for", handles.len());
                    return Flow::Exit;
                }
                Err(e) => {
                    debug!("segment failed: {}", e);
                    report_error();
                }
            }
        }

        wait_all(handles);
        Flow::Continue
    }

    fn execute_segment(
        &mut self,
        text: &str,
        handles: &mut Vec<ProcessHandle>,
    ) -> Result<Flow, SegmentError> {
        let segment = parse_segment(text, self.config.max_tokens)?;

        if let Some(builtin) = self.builtins.get(segment.name()) {
            debug!("builtin {:?}", segment.argv());
            return Ok(builtin.execute(segment.args(), &mut self.state)?);
        }

        let program = self
            .resolver
            .resolve(&self.state.search_path, segment.name())
            .ok_or_else(|| ProcessError::NotFound(segment.name().to_string()))?;
        handles.push(spawn(&program, segment.argv(), segment.redirect())?);
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ShellConfig;
    use crate::path::SearchPath;
    use serial_test::serial;
    use std::fs;
    use std::path::Path;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    fn shell() -> Shell {
        Shell::new(ShellConfig {
            search_path: SearchPath::new(["/bin", "/usr/bin"]),
            ..ShellConfig::default()
        })
    }

    fn target(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().into_owned()
    }

    fn read(path: &str) -> String {
        fs::read_to_string(Path::new(path)).expect("output file")
    }

    #[test]
    fn test_blank_line_is_a_no_op() {
        let mut shell = shell();
        assert_eq!(shell.execute_line(""), Flow::Continue);
        assert_eq!(shell.execute_line(" \t "), Flow::Continue);
        assert_eq!(shell.state().search_path.dirs(), ["/bin", "/usr/bin"]);
    }

    #[test]
    fn test_redirect_truncates_between_runs() {
        let dir = TempDir::new().expect("tempdir");
        let out = target(&dir, "out.txt");
        let mut shell = shell();

        shell.execute_line(&format!("echo first run > {}", out));
        shell.execute_line(&format!("echo hi > {}", out));
        assert_eq!(read(&out), "hi\n");
    }

    #[test]
    fn test_parallel_segments_all_finish_before_return() {
        let dir = TempDir::new().expect("tempdir");
        let (a, b, c) = (target(&dir, "a"), target(&dir, "b"), target(&dir, "c"));
        let mut shell = shell();

        let start = Instant::now();
        let line = format!(
            "sleep 0.5 & sleep 0.5 & echo a > {} & echo b > {} & echo c > {}",
            a, b, c
        );
        assert_eq!(shell.execute_line(&line), Flow::Continue);
        let elapsed = start.elapsed();

        assert!(elapsed >= Duration::from_millis(500));
        assert!(elapsed < Duration::from_millis(1500));
        assert_eq!(read(&a), "a\n");
        assert_eq!(read(&b), "b\n");
        assert_eq!(read(&c), "c\n");
    }

    #[test]
    fn test_failed_segment_does_not_affect_siblings() {
        let dir = TempDir::new().expect("tempdir");
        let out = target(&dir, "sibling.txt");
        let mut shell = shell();

        for bad in ["cmd >", "> cmd", "no-such-program-here", "exit extra", ""] {
            let line = format!("{} & echo ok > {}", bad, out);
            assert_eq!(shell.execute_line(&line), Flow::Continue);
            assert_eq!(read(&out), "ok\n");
            fs::remove_file(&out).expect("cleanup");
        }
    }

    #[test]
    fn test_bad_redirect_launches_nothing() {
        let dir = TempDir::new().expect("tempdir");
        let out = target(&dir, "never.txt");
        let mut shell = shell();

        shell.execute_line(&format!("echo hi > {} extra", out));
        shell.execute_line(&format!("echo hi > {} > {}", out, out));
        assert!(!Path::new(&out).exists());
    }

    #[test]
    fn test_empty_search_path_blocks_external_commands() {
        let dir = TempDir::new().expect("tempdir");
        let out = target(&dir, "out.txt");
        let mut shell = shell();

        shell.execute_line("path");
        assert!(shell.state().search_path.is_empty());
        shell.execute_line(&format!("echo nope > {}", out));
        assert!(!Path::new(&out).exists());

        shell.execute_line("path /usr/bin /bin");
        shell.execute_line(&format!("echo yes > {}", out));
        assert_eq!(read(&out), "yes\n");
    }

    #[test]
    fn test_builtin_ignores_redirect() {
        let dir = TempDir::new().expect("tempdir");
        let out = target(&dir, "builtin.txt");
        let mut shell = shell();

        assert_eq!(shell.execute_line(&format!("path /x > {}", out)), Flow::Continue);
        assert_eq!(shell.state().search_path.dirs(), ["/x"]);
        assert!(!Path::new(&out).exists());
    }

    #[test]
    fn test_exit_variants() {
        let mut shell = shell();
        assert_eq!(shell.execute_line("exit extra"), Flow::Continue);
        assert_eq!(shell.execute_line("  exit  "), Flow::Exit);
    }

    // `exit` in a non-final segment ends the interpreter without waiting for
    // siblings launched earlier on the same line.
    #[test]
    fn test_exit_does_not_wait_for_siblings() {
        let mut shell = shell();
        let start = Instant::now();
        assert_eq!(shell.execute_line("sleep 2 & exit & path /never"), Flow::Exit);
        assert!(start.elapsed() < Duration::from_secs(1));
        assert_eq!(shell.state().search_path.dirs(), ["/bin", "/usr/bin"]);
    }

    #[test]
    #[serial]
    fn test_cd_changes_directory_for_later_segments() {
        let original = std::env::current_dir().expect("cwd");
        let dir = TempDir::new().expect("tempdir");
        let mut shell = shell();

        let line = format!("cd {} & echo here > rel.txt", dir.path().display());
        shell.execute_line(&line);
        assert_eq!(read(&target(&dir, "rel.txt")), "here\n");

        std::env::set_current_dir(original).expect("restore cwd");
    }

    #[test]
    #[serial]
    fn test_cd_failure_leaves_directory() {
        let before = std::env::current_dir().expect("cwd");
        let mut shell = shell();

        shell.execute_line("cd /nonexistent/dir");
        shell.execute_line("cd");
        assert_eq!(std::env::current_dir().expect("cwd"), before);
    }
}
