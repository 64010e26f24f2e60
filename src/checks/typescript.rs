//! Static-analysis helper check.
use anyhow::{Context as _, Result};
use regex::Regex;

use super::report::CheckOutcome;
use super::{Check, Context};

/// Verify that the TypeScript compiler is available and reports a sane
/// version.
///
/// A zero exit alone is not enough: `bunx` happily resolves unrelated
/// binaries, so the output must also contain a semantic version.
#[derive(Debug)]
pub struct TypeScriptCompiler;

impl Check for TypeScriptCompiler {
    fn name(&self) -> &'static str {
        "TypeScript compiler"
    }

    fn run(&self, ctx: &Context) -> Result<CheckOutcome> {
        let result = ctx.executor.run("bunx", &["tsc", "--version"], ctx.root());
        if !result.success() {
            return Ok(CheckOutcome::fail(
                "tsc not found or broken",
                "Add it to the project: bun add -D typescript",
            ));
        }

        let semver = Regex::new(r"\d+\.\d+\.\d+").context("compiling version pattern")?;
        semver.find(&result.output).map_or_else(
            || {
                Ok(CheckOutcome::fail(
                    format!(
                        "tsc produced no recognizable version: {}",
                        result.output.trim()
                    ),
                    "Reinstall it: bun add -D typescript",
                ))
            },
            |version| Ok(CheckOutcome::pass(format!("tsc {}", version.as_str()))),
        )
    }
}
