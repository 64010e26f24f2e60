//! Named, ordered diagnostic checks aggregated into a report.
//!
//! Each check is an independent function from the project [`Context`] to a
//! [`CheckOutcome`]; the engine runs them strictly in registration order
//! and aggregates a [`Report`]. A check marked *fatal prerequisite* that
//! fails stops the run early; the remaining checks are synthesized as
//! `Skipped` so the report always has one entry per registered check.
pub mod context;
pub mod linter;
pub mod manifest;
pub mod report;
pub mod rules;
pub mod runtime;
pub mod typescript;

pub use context::Context;
pub use report::{CheckOutcome, CheckResult, Report};

use anyhow::Result;

use crate::logging::CheckStatus;

/// A named, executable diagnostic check.
pub trait Check: Send + Sync {
    /// Human-readable check name.
    fn name(&self) -> &str;

    /// Whether a `Fail` of this check halts the remaining checks.
    ///
    /// Reserved for checks whose failure makes every later check
    /// meaningless (e.g. the toolchain runtime itself is missing).
    fn fatal(&self) -> bool {
        false
    }

    /// Execute the check.
    ///
    /// # Errors
    ///
    /// May return any error; the engine converts it into a `Fail` result,
    /// so no error ever crosses a check boundary.
    fn run(&self, ctx: &Context) -> Result<CheckOutcome>;
}

/// The complete set of checks run by the doctor command.
///
/// Order is meaningful: it is both execution and display order, and the
/// fatal runtime check must come first.
#[must_use]
pub fn all_doctor_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(runtime::BunRuntime),
        Box::new(linter::BiomeInstalled),
        Box::new(linter::LintProject),
        Box::new(linter::LintConfigPresent),
        Box::new(typescript::TypeScriptCompiler),
        Box::new(manifest::ManifestParses),
        Box::new(manifest::TestEntrypoint),
        Box::new(rules::RulesDirPresent),
        Box::new(rules::RulesLink),
    ]
}

/// Execute every check in order and aggregate the results.
///
/// Total for any combination of check outcomes: check errors become
/// `Fail` entries, and a failed fatal-prerequisite check turns the
/// remaining entries into `Skipped`. The returned report always has one
/// entry per registered check.
pub fn run_all(checks: &[Box<dyn Check>], ctx: &Context) -> Report {
    let mut report = Report::new();
    let mut fatal_failure = false;

    for check in checks {
        if fatal_failure {
            report.push(CheckResult::skipped(check.name()));
            continue;
        }

        ctx.log.debug(&format!("running check: {}", check.name()));
        let outcome = check.run(ctx).unwrap_or_else(|e| {
            CheckOutcome::fail(
                format!("{e:#}"),
                "Re-run with --verbose and inspect the log file",
            )
        });

        if check.fatal() && outcome.status == CheckStatus::Fail {
            fatal_failure = true;
        }
        report.push(CheckResult::from_outcome(check.name(), outcome));
    }

    report
}
