//! Check results and the aggregated report.
use crate::logging::{CheckStatus, Log};

/// What one check concluded, before it is named and recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Final status.
    pub status: CheckStatus,
    /// One-line description of what was found.
    pub message: String,
    /// Actionable text resolving a non-pass outcome.
    pub remediation: Option<String>,
}

impl CheckOutcome {
    /// A passing outcome.
    #[must_use]
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Pass,
            message: message.into(),
            remediation: None,
        }
    }

    /// An advisory outcome with a remediation hint.
    #[must_use]
    pub fn warn(message: impl Into<String>, remediation: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Warn,
            message: message.into(),
            remediation: Some(remediation.into()),
        }
    }

    /// A failing outcome with a remediation hint.
    #[must_use]
    pub fn fail(message: impl Into<String>, remediation: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Fail,
            message: message.into(),
            remediation: Some(remediation.into()),
        }
    }
}

/// One named entry of a [`Report`]. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Name of the check that produced this result.
    pub name: String,
    /// Final status.
    pub status: CheckStatus,
    /// One-line description of what was found.
    pub message: String,
    /// Actionable text resolving a non-pass outcome.
    pub remediation: Option<String>,
}

impl CheckResult {
    /// Attach a check name to an outcome.
    #[must_use]
    pub fn from_outcome(name: &str, outcome: CheckOutcome) -> Self {
        Self {
            name: name.to_string(),
            status: outcome.status,
            message: outcome.message,
            remediation: outcome.remediation,
        }
    }

    /// Synthesize the result of a check that never ran because a fatal
    /// prerequisite failed earlier.
    #[must_use]
    pub fn skipped(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Skipped,
            message: "skipped: a prerequisite check failed".to_string(),
            remediation: None,
        }
    }
}

/// Ordered sequence of check results for one engine run.
///
/// Order is execution order and is meaningful for display. The report has
/// exactly one entry per registered check, including synthesized
/// `Skipped` entries after a fatal stop.
#[derive(Debug, Clone, Default)]
pub struct Report {
    results: Vec<CheckResult>,
}

impl Report {
    /// An empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Append a result.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// The recorded results, in execution order.
    #[must_use]
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the report is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Aggregate status: `Fail` if any entry failed, else `Warn` if any
    /// warned, else `Pass`. Skipped entries do not participate.
    #[must_use]
    pub fn overall_status(&self) -> CheckStatus {
        if self.failures() > 0 {
            CheckStatus::Fail
        } else if self.warnings() > 0 {
            CheckStatus::Warn
        } else {
            CheckStatus::Pass
        }
    }

    /// Process exit code for this report: 1 for `Fail`, 0 otherwise.
    /// Warnings are advisory and must never block a pipeline.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(self.overall_status() == CheckStatus::Fail)
    }

    /// Number of passed entries.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.count(CheckStatus::Pass)
    }

    /// Number of warning entries.
    #[must_use]
    pub fn warnings(&self) -> usize {
        self.count(CheckStatus::Warn)
    }

    /// Number of failed entries.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.count(CheckStatus::Fail)
    }

    /// Number of synthesized skipped entries.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(CheckStatus::Skipped)
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    /// Render one line per result (plus remediation hints) and record
    /// every entry with the logger for the trailing summary.
    ///
    /// No diagnostic logic lives here: the report is rendered exactly as
    /// produced.
    pub fn render(&self, log: &dyn Log) {
        for result in &self.results {
            let line = format!("{}: {}", result.name, result.message);
            match result.status {
                CheckStatus::Pass => log.info(&format!("\x1b[32m✓\x1b[0m {line}")),
                CheckStatus::Warn => log.warn(&line),
                CheckStatus::Fail => log.error(&line),
                CheckStatus::Skipped => log.info(&format!("\x1b[2m· {line}\x1b[0m")),
            }
            // Remediation follows its status line onto the same stream.
            if let Some(remedy) = &result.remediation {
                let hint = format!("  -> {remedy}");
                match result.status {
                    CheckStatus::Fail => log.error(&hint),
                    CheckStatus::Warn => log.warn(&hint),
                    CheckStatus::Pass | CheckStatus::Skipped => log.info(&hint),
                }
            }
            log.record_check(result.name.as_str(), result.status, Some(&result.message));
        }
    }
}
