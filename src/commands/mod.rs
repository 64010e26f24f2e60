//! Top-level subcommand orchestration.
pub mod doctor;
pub mod init;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::checks::{self, Context};
use crate::cli::GlobalOpts;
use crate::config::Config;
use crate::logging::{CheckStatus, Log, Logger};
use crate::platform::Platform;

/// Shared state produced by the common command setup sequence.
///
/// Encapsulates platform detection, root resolution, and configuration
/// loading so that each command does not have to repeat the boilerplate.
#[derive(Debug)]
pub struct CommandSetup {
    /// Detected platform information.
    pub platform: Platform,
    /// Resolved configuration.
    pub config: Config,
}

impl CommandSetup {
    /// Detect the platform, resolve the project root and Boulder home, and
    /// load all configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory cannot be determined or the
    /// settings file fails to parse.
    pub fn init(global: &GlobalOpts, log: &Logger) -> Result<Self> {
        let platform = Platform::detect();
        let root = resolve_root(global)?;
        let home = boulder_home()?;

        log.stage("Loading configuration");
        let config = Config::load(&root, &home)?;
        log.debug(&format!("project root: {}", root.display()));
        log.debug(&format!("boulder home: {}", home.display()));
        log.debug(&format!("{} link spec(s)", config.link_specs().len()));

        // Validate configuration and display warnings
        let warnings = config.validate();
        if !warnings.is_empty() {
            log.warn(&format!(
                "found {} configuration warning(s):",
                warnings.len()
            ));
            for warning in &warnings {
                log.warn(&format!(
                    "  {} [{}]: {}",
                    warning.source, warning.item, warning.message
                ));
            }
        }

        Ok(Self { platform, config })
    }
}

/// Resolve the project root directory from CLI arguments or the current
/// directory.
///
/// # Errors
///
/// Returns an error if an explicit `--root` does not exist, or the current
/// directory cannot be determined.
pub fn resolve_root(global: &GlobalOpts) -> Result<PathBuf> {
    if let Some(ref root) = global.root {
        if !root.is_dir() {
            anyhow::bail!("project directory does not exist: {}", root.display());
        }
        return Ok(root.clone());
    }
    Ok(std::env::current_dir()?)
}

/// Resolve the Boulder home: `$BOULDER_HOME`, or `~/.config/boulder`.
///
/// # Errors
///
/// Returns an error if no home directory can be determined.
pub fn boulder_home() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("BOULDER_HOME") {
        return Ok(PathBuf::from(home));
    }
    Ok(home_dir()?.join(".config").join("boulder"))
}

fn home_dir() -> Result<PathBuf> {
    let home = if cfg!(target_os = "windows") {
        std::env::var("USERPROFILE").or_else(|_| std::env::var("HOME"))
    } else {
        std::env::var("HOME")
    };
    home.map(PathBuf::from)
        .map_err(|_| anyhow::anyhow!("cannot determine the home directory (HOME is not set)"))
}

/// Build the check execution context from a completed setup.
#[must_use]
pub fn make_check_context(setup: CommandSetup, log: &Arc<Logger>, dry_run: bool) -> Context {
    Context::new(
        setup.config,
        setup.platform,
        Arc::clone(log) as Arc<dyn Log>,
        dry_run,
        Arc::new(crate::exec::SystemExecutor),
    )
}

/// Run every doctor check, render the report, and bail if any check
/// failed.
///
/// Warnings never produce an error: the process exit code is driven by
/// failures only.
///
/// # Errors
///
/// Returns an error if one or more checks recorded a failure.
pub fn run_doctor_to_completion(ctx: &Context, log: &Logger) -> Result<()> {
    log.stage("Running checks");
    let all = checks::all_doctor_checks();
    let report = checks::run_all(&all, ctx);
    report.render(log);
    log.print_summary();

    if report.overall_status() == CheckStatus::Fail {
        anyhow::bail!("{} check(s) failed", report.failures());
    }
    Ok(())
}
