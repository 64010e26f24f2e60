//! Structured logger with check-summary collection.
use std::path::PathBuf;
use std::sync::Mutex;

use super::types::{CheckEntry, CheckStatus, Log};
use super::utils::{log_file_path, terminal_columns};

/// Implement the display methods of [`Log`] by delegating to inherent methods
/// of the same name on the implementing type.
///
/// The `record_check` method is **not** included because its signature differs
/// from the `fn(&self, &str)` pattern shared by the display methods.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Structured logger with check-summary collection.
///
/// All messages are always written to a persistent log file at
/// `$XDG_CACHE_HOME/boulder/<command>.log` (default `~/.cache/boulder/<command>.log`)
/// with timestamps and ANSI codes stripped, regardless of the verbose flag.
#[derive(Debug)]
pub struct Logger {
    checks: Mutex<Vec<CheckEntry>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Create a new logger.
    ///
    /// Stores the log file path for display in the run summary. The log file
    /// itself is created and initialised by
    /// [`init_subscriber`](super::subscriber::init_subscriber); this
    /// constructor does not write to the file.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            checks: Mutex::new(Vec::new()),
            log_file: log_file_path(command),
        }
    }

    /// Return a clone of all recorded check entries (test-only).
    #[cfg(test)]
    pub(crate) fn check_entries(&self) -> Vec<CheckEntry> {
        self.checks.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: "boulder::stage", "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose; always
    /// written to the log file).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: "boulder::dry_run", "{msg}");
    }

    /// Record a check result for the summary.
    pub fn record_check(&self, name: &str, status: CheckStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.checks.lock() {
            guard.push(CheckEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Return `true` if any recorded check has failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Count the number of failed checks.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.checks.lock().map_or(0, |guard| {
            guard
                .iter()
                .filter(|c| c.status == CheckStatus::Fail)
                .count()
        })
    }

    /// Print the summary of all recorded checks.
    pub fn print_summary(&self) {
        let checks = match self.checks.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => return,
        };
        if checks.is_empty() {
            return;
        }

        println!();
        self.stage("Summary");

        let mut passed = 0u32;
        let mut warnings = 0u32;
        let mut failed = 0u32;
        let mut skipped = 0u32;

        let cols = terminal_columns();
        for check in &checks {
            let (icon, color) = match check.status {
                CheckStatus::Pass => {
                    passed += 1;
                    ("✓", "\x1b[32m")
                }
                CheckStatus::Warn => {
                    warnings += 1;
                    ("○", "\x1b[33m")
                }
                CheckStatus::Fail => {
                    failed += 1;
                    ("✗", "\x1b[31m")
                }
                CheckStatus::Skipped => {
                    skipped += 1;
                    ("·", "\x1b[2m")
                }
            };

            let mut line = check.message.as_ref().map_or_else(
                || format!("{icon} {}", check.name),
                |msg| format!("{icon} {} ({msg})", check.name),
            );
            if line.chars().count() > cols {
                line = line.chars().take(cols.saturating_sub(1)).collect();
                line.push('…');
            }
            self.info(&format!("{color}{line}\x1b[0m"));
        }

        println!();
        let total = passed + warnings + failed + skipped;
        self.info(&format!(
            "{total} checks: \x1b[32m{passed} passed\x1b[0m, \x1b[33m{warnings} warnings\x1b[0m, \x1b[31m{failed} failed\x1b[0m, \x1b[2m{skipped} skipped\x1b[0m"
        ));

        if let Some(path) = &self.log_file {
            self.info(&format!("\x1b[2mlog: {}\x1b[0m", path.display()));
        }
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, warn, error, dry_run);

    fn record_check(&self, name: &str, status: CheckStatus, message: Option<&str>) {
        self.record_check(name, status, message);
    }
}
