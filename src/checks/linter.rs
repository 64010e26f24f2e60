//! Formatter/linter checks: tool presence, a project-wide lint pass, and
//! the lint configuration marker file.
use anyhow::Result;

use super::report::CheckOutcome;
use super::{Check, Context};
use crate::config::LINT_CONFIG_FILE;

const ADD_BIOME_HINT: &str = "Add it to the project: bun add -D @biomejs/biome";

/// Verify that the Biome formatter/linter answers a version query.
#[derive(Debug)]
pub struct BiomeInstalled;

impl Check for BiomeInstalled {
    fn name(&self) -> &'static str {
        "Biome installed"
    }

    fn run(&self, ctx: &Context) -> Result<CheckOutcome> {
        let result = ctx
            .executor
            .run("bunx", &["biome", "--version"], ctx.root());
        if result.success() {
            let version = result.output.lines().next().unwrap_or("").trim().to_string();
            Ok(CheckOutcome::pass(version))
        } else {
            Ok(CheckOutcome::fail(
                "biome not found or broken",
                ADD_BIOME_HINT,
            ))
        }
    }
}

/// Run Biome over the project.
///
/// Lint findings are advisory by default; `strict_lint = true` in
/// `boulder.toml` escalates them to a hard failure.
#[derive(Debug)]
pub struct LintProject;

impl Check for LintProject {
    fn name(&self) -> &'static str {
        "Lint"
    }

    fn run(&self, ctx: &Context) -> Result<CheckOutcome> {
        let result = ctx.executor.run("bunx", &["biome", "check", "."], ctx.root());
        if result.success() {
            return Ok(CheckOutcome::pass("no lint issues"));
        }

        let message = "biome check reported issues";
        let remedy = "Run `bunx biome check .` for details, `--write` to fix";
        if ctx.config.settings.strict_lint {
            Ok(CheckOutcome::fail(message, remedy))
        } else {
            Ok(CheckOutcome::warn(message, remedy))
        }
    }
}

/// Verify that the lint configuration marker file exists at the project
/// root. Recommended, not required.
#[derive(Debug)]
pub struct LintConfigPresent;

impl Check for LintConfigPresent {
    fn name(&self) -> &'static str {
        "Lint config"
    }

    fn run(&self, ctx: &Context) -> Result<CheckOutcome> {
        if ctx.config.lint_config_path().is_file() {
            Ok(CheckOutcome::pass(format!("{LINT_CONFIG_FILE} found")))
        } else {
            Ok(CheckOutcome::warn(
                format!("{LINT_CONFIG_FILE} not found (recommended)"),
                "Create one: bunx biome init",
            ))
        }
    }
}
