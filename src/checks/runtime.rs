//! Toolchain runtime check.
use anyhow::Result;

use super::report::CheckOutcome;
use super::{Check, Context};

/// Remediation hint for a missing Bun installation.
const INSTALL_HINT: &str = "Install Bun: curl -fsSL https://bun.sh/install | bash";

/// Verify that the Bun runtime is present and answers a version query.
///
/// This is the fatal prerequisite of the doctor run: without a runtime,
/// every later subprocess check would fail for the same root cause.
#[derive(Debug)]
pub struct BunRuntime;

impl Check for BunRuntime {
    fn name(&self) -> &'static str {
        "Bun runtime"
    }

    fn fatal(&self) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<CheckOutcome> {
        if !ctx.executor.which("bun") {
            return Ok(CheckOutcome::fail("bun not found on PATH", INSTALL_HINT));
        }

        let result = ctx.executor.run("bun", &["--version"], ctx.root());
        if result.success() {
            let version = result.output.lines().next().unwrap_or("").trim().to_string();
            Ok(CheckOutcome::pass(format!("bun {version}")))
        } else {
            Ok(CheckOutcome::fail(
                format!("bun is present but broken: {}", result.output.trim()),
                INSTALL_HINT,
            ))
        }
    }
}
