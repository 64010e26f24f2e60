//! The `doctor` subcommand: run all checks, never mutate.
use std::sync::Arc;

use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::logging::Logger;

/// Run the doctor command.
///
/// # Errors
///
/// Returns an error if setup fails or any check records a failure;
/// warnings alone never produce an error.
pub fn run(global: &GlobalOpts, log: &Arc<Logger>) -> Result<()> {
    let version = option_env!("BOULDER_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    log.info(&format!("boulder {version}"));

    let setup = super::CommandSetup::init(global, log)?;
    let ctx = super::make_check_context(setup, log, global.dry_run);
    super::run_doctor_to_completion(&ctx, log)
}
