//! Core logging types: check entries, status, and the [`Log`] trait.

/// Recorded result of one diagnostic check, for summary reporting.
#[derive(Debug, Clone)]
pub struct CheckEntry {
    /// Human-readable check name.
    pub name: String,
    /// Final status of the check.
    pub status: CheckStatus,
    /// Optional detail message (e.g., failure description or skip reason).
    pub message: Option<String>,
}

/// Status of a completed diagnostic check.
///
/// `Fail` is the only status that blocks: the process exit code is 1 iff
/// at least one check failed. Warnings are advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed.
    Pass,
    /// Check found something advisory; never affects the exit code.
    Warn,
    /// Check failed; drives the exit code to 1.
    Fail,
    /// Check did not run because a fatal prerequisite failed earlier.
    Skipped,
}

/// Abstraction over logging backends.
///
/// Checks and commands log through this trait so tests can capture output
/// without touching the global tracing dispatcher.
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str);
    /// Record a check result for the summary.
    fn record_check(&self, name: &str, status: CheckStatus, message: Option<&str>);
}
