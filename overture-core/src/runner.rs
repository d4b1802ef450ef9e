//! Shell command execution with structured, never-failing results.
//!
//! The runner is the only place the hook touches `std::process`. Every
//! invocation yields a [`CommandResult`]; a non-zero exit or a spawn failure
//! is data in the result, never an `Err`. This keeps callers (the sync state
//! machine above all) to plain string/boolean inspection.

use std::path::Path;
use std::process::Command;

/// Outcome of a single subprocess invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// `exit_code == 0`.
    pub success: bool,
    /// stdout followed by stderr.
    pub output: String,
    /// Process exit code; `-1` when the process was killed by a signal or
    /// never spawned.
    pub exit_code: i32,
}

impl CommandResult {
    fn spawn_failure(err: std::io::Error) -> Self {
        CommandResult {
            success: false,
            output: err.to_string(),
            exit_code: -1,
        }
    }
}

/// Run `command` through the host shell in `dir` and wait for completion.
///
/// Spawns exactly one external process per call; no retries, no timeout
/// beyond what the OS applies.
pub fn run(command: &str, dir: &Path) -> CommandResult {
    let output = match shell_command(command).current_dir(dir).output() {
        Ok(output) => output,
        Err(err) => return CommandResult::spawn_failure(err),
    };

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    CommandResult {
        success: output.status.success(),
        output: text,
        exit_code: output.status.code().unwrap_or(-1),
    }
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    #[cfg(unix)]
    fn successful_command_captures_stdout() {
        let dir = TempDir::new().expect("tempdir");
        let result = run("printf hello", dir.path());
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.output, "hello");
    }

    #[test]
    #[cfg(unix)]
    fn failing_command_reports_exit_code_without_erroring() {
        let dir = TempDir::new().expect("tempdir");
        let result = run("exit 3", dir.path());
        assert!(!result.success);
        assert_eq!(result.exit_code, 3);
    }

    #[test]
    #[cfg(unix)]
    fn stdout_and_stderr_are_concatenated() {
        let dir = TempDir::new().expect("tempdir");
        let result = run("printf out; printf err >&2", dir.path());
        assert!(result.success);
        assert_eq!(result.output, "outerr");
    }

    #[test]
    fn missing_working_directory_folds_into_failed_result() {
        let result = run("true", Path::new("/nonexistent/overture/cwd"));
        assert!(!result.success);
        assert_eq!(result.exit_code, -1);
        assert!(!result.output.is_empty(), "spawn error text expected");
    }

    #[test]
    #[cfg(unix)]
    fn runs_in_the_given_directory() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::write(dir.path().join("marker"), "x").expect("write");
        let result = run("ls", dir.path());
        assert!(result.success);
        assert!(result.output.contains("marker"));
    }
}
