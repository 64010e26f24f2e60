//! Project manifest checks: presence/parse, and the declared entrypoints.
use anyhow::Result;

use super::report::CheckOutcome;
use super::{Check, Context};
use crate::config::manifest::{self, MANIFEST_FILE};

const INIT_HINT: &str = "Run `bun init` in the project root";

/// Name of the disposable file written to exercise the test runner.
const PROBE_FILE: &str = ".boulder-probe.test.ts";

/// A trivial passing test, enough to prove the runner itself works.
const PROBE_CONTENT: &str = r#"import { expect, test } from "bun:test";

test("environment probe", () => {
  expect(1 + 1).toBe(2);
});
"#;

/// Verify that the project manifest exists and parses as a structured
/// mapping.
#[derive(Debug)]
pub struct ManifestParses;

impl Check for ManifestParses {
    fn name(&self) -> &'static str {
        "Manifest"
    }

    fn run(&self, ctx: &Context) -> Result<CheckOutcome> {
        let path = ctx.config.manifest_path();
        if !path.exists() {
            return Ok(CheckOutcome::fail(
                format!("{MANIFEST_FILE} not found"),
                INIT_HINT,
            ));
        }

        match manifest::load(&path) {
            Ok(m) => {
                let name = m.name.as_deref().unwrap_or("unnamed project");
                Ok(CheckOutcome::pass(format!("{MANIFEST_FILE} ok ({name})")))
            }
            Err(e) => Ok(CheckOutcome::fail(
                format!("{e:#}"),
                format!("Fix the JSON syntax in {MANIFEST_FILE}"),
            )),
        }
    }
}

/// Verify that the manifest declares a usable entrypoint.
///
/// A declared `scripts.test` is exercised against a disposable probe file
/// so a broken runner is caught here rather than in CI. A project with
/// only `scripts.build` gets a warning; a project with neither fails.
#[derive(Debug)]
pub struct TestEntrypoint;

impl Check for TestEntrypoint {
    fn name(&self) -> &'static str {
        "Test entrypoint"
    }

    fn run(&self, ctx: &Context) -> Result<CheckOutcome> {
        // Parse the manifest fresh: checks never share in-memory results.
        let Ok(m) = manifest::load(&ctx.config.manifest_path()) else {
            return Ok(CheckOutcome::fail(
                format!("cannot read {MANIFEST_FILE}"),
                INIT_HINT,
            ));
        };

        if m.test_script().is_some() {
            return Ok(probe_test_runner(ctx));
        }

        if m.build_script().is_some() {
            return Ok(CheckOutcome::warn(
                "scripts.build is declared but scripts.test is not",
                format!("Add a \"test\" script to {MANIFEST_FILE}"),
            ));
        }

        Ok(CheckOutcome::fail(
            "neither scripts.test nor scripts.build is declared",
            format!("Add a \"test\" script to {MANIFEST_FILE}"),
        ))
    }
}

/// Write the probe file, run it through the test runner, and clean up.
///
/// Cleanup failure is logged and never affects the result.
fn probe_test_runner(ctx: &Context) -> CheckOutcome {
    let probe_path = ctx.root().join(PROBE_FILE);
    if let Err(e) = std::fs::write(&probe_path, PROBE_CONTENT) {
        return CheckOutcome::fail(
            format!("cannot write probe file {}: {e}", probe_path.display()),
            "Check permissions on the project directory",
        );
    }

    let result = ctx.executor.run("bun", &["test", PROBE_FILE], ctx.root());

    if let Err(e) = std::fs::remove_file(&probe_path) {
        ctx.log
            .warn(&format!("could not remove {}: {e}", probe_path.display()));
    }

    if result.success() {
        CheckOutcome::pass("scripts.test is declared and the runner works")
    } else {
        CheckOutcome::fail(
            "the test runner failed on a trivial probe",
            "Run `bun test` and inspect the output",
        )
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::super::test_helpers::{MockExecutor, make_context, mock_config, mock_project};
    use super::*;
    use crate::logging::CheckStatus;

    #[test]
    fn manifest_missing_fails_with_init_hint() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = make_context(mock_config(dir.path()), MockExecutor::ok(""));
        let outcome = ManifestParses.run(&ctx).unwrap();
        assert_eq!(outcome.status, CheckStatus::Fail);
        assert!(outcome.remediation.unwrap().contains("bun init"));
    }

    #[test]
    fn manifest_parse_error_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = mock_project(dir.path(), "{ broken");
        let ctx = make_context(config, MockExecutor::ok(""));
        assert_eq!(ManifestParses.run(&ctx).unwrap().status, CheckStatus::Fail);
    }

    #[test]
    fn manifest_valid_passes_with_project_name() {
        let dir = tempfile::tempdir().unwrap();
        let config = mock_project(dir.path(), r#"{ "name": "demo" }"#);
        let ctx = make_context(config, MockExecutor::ok(""));
        let outcome = ManifestParses.run(&ctx).unwrap();
        assert_eq!(outcome.status, CheckStatus::Pass);
        assert!(outcome.message.contains("demo"));
    }

    #[test]
    fn entrypoint_passes_when_probe_run_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let config = mock_project(dir.path(), r#"{ "scripts": { "test": "bun test" } }"#);
        let root = config.root.clone();
        let ctx = make_context(config, MockExecutor::ok("1 pass"));
        let outcome = TestEntrypoint.run(&ctx).unwrap();
        assert_eq!(outcome.status, CheckStatus::Pass);
        assert!(
            !root.join(PROBE_FILE).exists(),
            "probe file must be cleaned up"
        );
    }

    #[test]
    fn entrypoint_fails_when_probe_run_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = mock_project(dir.path(), r#"{ "scripts": { "test": "bun test" } }"#);
        let root = config.root.clone();
        let ctx = make_context(config, MockExecutor::fail(1, "0 pass, 1 fail"));
        let outcome = TestEntrypoint.run(&ctx).unwrap();
        assert_eq!(outcome.status, CheckStatus::Fail);
        assert!(
            !root.join(PROBE_FILE).exists(),
            "probe file must be cleaned up even on failure"
        );
    }

    #[test]
    fn entrypoint_warns_on_build_without_test() {
        let dir = tempfile::tempdir().unwrap();
        let config = mock_project(dir.path(), r#"{ "scripts": { "build": "bun build ." } }"#);
        let ctx = make_context(config, MockExecutor::ok(""));
        let outcome = TestEntrypoint.run(&ctx).unwrap();
        assert_eq!(outcome.status, CheckStatus::Warn);
        assert!(outcome.remediation.unwrap().contains("\"test\""));
    }

    #[test]
    fn entrypoint_fails_when_no_entrypoints_declared() {
        let dir = tempfile::tempdir().unwrap();
        let config = mock_project(dir.path(), r#"{ "name": "demo" }"#);
        let ctx = make_context(config, MockExecutor::ok(""));
        assert_eq!(TestEntrypoint.run(&ctx).unwrap().status, CheckStatus::Fail);
    }

    #[test]
    fn entrypoint_fails_when_manifest_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = make_context(mock_config(dir.path()), MockExecutor::ok(""));
        assert_eq!(TestEntrypoint.run(&ctx).unwrap().status, CheckStatus::Fail);
    }
}
