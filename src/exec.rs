//! Synchronous external command execution.
//!
//! Checks talk to external tools (`bun`, `bunx`) exclusively through the
//! [`Executor`] trait so that unit tests can substitute a mock. The
//! contract is deliberately narrow: a command either produces an exit code
//! and its combined output, or a spawn failure — and both are represented
//! as a [`ProcessResult`], never as an error.
use std::path::Path;
use std::process::{Command, Output};

/// Exit code reported when the command could not be spawned at all
/// (binary not found, permission denied). 127 follows the shell
/// convention for "command not found".
pub const SPAWN_FAILURE_CODE: i32 = 127;

/// Result of a command execution.
///
/// `output` holds stdout and stderr concatenated; the relative ordering of
/// the two streams is not guaranteed. A process terminated by a signal
/// reports code -1. Downstream consumers only rely on zero/non-zero.
#[derive(Debug, Clone)]
pub struct ProcessResult {
    /// Exit code of the child, or a non-zero sentinel for launch failure.
    pub code: i32,
    /// Combined stdout and stderr of the child, or the spawn error text.
    pub output: String,
}

impl ProcessResult {
    /// Whether the command ran and exited successfully.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.code == 0
    }

    /// Build a result describing a failure to launch the command.
    #[must_use]
    pub fn spawn_failure(program: &str, err: &std::io::Error) -> Self {
        Self {
            code: SPAWN_FAILURE_CODE,
            output: format!("failed to execute {program}: {err}"),
        }
    }
}

impl From<Output> for ProcessResult {
    fn from(output: Output) -> Self {
        let mut text = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&stderr);
        }
        Self {
            code: output.status.code().unwrap_or(-1),
            output: text,
        }
    }
}

/// Abstraction over external command execution (for testing or real
/// system calls).
pub trait Executor: Send + Sync {
    /// Run `program` with `args` in `cwd`, blocking until it terminates.
    ///
    /// Never fails: spawn errors are folded into the returned
    /// [`ProcessResult`] with [`SPAWN_FAILURE_CODE`].
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> ProcessResult;

    /// Check if a program is available on PATH.
    fn which(&self, program: &str) -> bool;
}

/// [`Executor`] backed by real OS processes.
#[derive(Debug, Default)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> ProcessResult {
        match Command::new(program).args(args).current_dir(cwd).output() {
            Ok(output) => ProcessResult::from(output),
            Err(err) => ProcessResult::spawn_failure(program, &err),
        }
    }

    fn which(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
