//! The `init` subcommand: reconcile the rules links, then run doctor.
use std::sync::Arc;

use anyhow::Result;

use crate::cli::{GlobalOpts, InitOpts};
use crate::config::Config;
use crate::error::BoulderError;
use crate::logging::{Log, Logger};
use crate::resources::{LinkPolicy, Outcome, reconcile};

/// Run the init command.
///
/// Preflight checks mirror what a fresh machine gets wrong most often:
/// not being inside a project, and not having the shared rules installed.
/// Both terminate immediately with a remediation hint. Link
/// reconciliation then runs under `--force` semantics, and a successful
/// setup ends with a full doctor pass.
///
/// # Errors
///
/// Returns an error if a preflight fails, any link is blocked, or the
/// subsequent doctor run records a failure.
pub fn run(global: &GlobalOpts, opts: &InitOpts, log: &Arc<Logger>) -> Result<()> {
    let setup = super::CommandSetup::init(global, log)?;

    log.stage("Checking project");
    let manifest_path = setup.config.manifest_path();
    if !manifest_path.exists() {
        return Err(BoulderError::EnvironmentMissing {
            what: manifest_path.display().to_string(),
            remedy: "Run this inside a project directory, or create one with `bun init`."
                .to_string(),
        }
        .into());
    }

    let rules_source = setup.config.rules_source();
    if !rules_source.exists() {
        return Err(BoulderError::EnvironmentMissing {
            what: format!("Boulder rules at {}", rules_source.display()),
            remedy: format!(
                "Install Boulder: git clone <repo> {}",
                setup.config.boulder_home.display()
            ),
        }
        .into());
    }

    log.stage("Linking rules");
    if global.dry_run {
        preview_links(&setup.config, opts.force, log.as_ref());
        log.info("dry run: skipping doctor");
        return Ok(());
    }

    reconcile_project_links(&setup.config, opts.force, log.as_ref())?;

    let ctx = super::make_check_context(setup, log, global.dry_run);
    super::run_doctor_to_completion(&ctx, log)
}

/// Reconcile every configured link, logging each outcome.
///
/// # Errors
///
/// Returns a [`BoulderError::LinkConflict`] for the first blocked link;
/// nothing is removed without `force`.
pub fn reconcile_project_links(config: &Config, force: bool, log: &dyn Log) -> Result<()> {
    let policy = if force {
        LinkPolicy::ForceOverwrite
    } else {
        LinkPolicy::CreateIfAbsent
    };

    for spec in config.link_specs() {
        match reconcile(&spec, policy) {
            Outcome::AlreadyLinked => {
                log.info(&format!("already linked: {}", spec.description()));
            }
            Outcome::Created => {
                log.info(&format!("linked: {}", spec.description()));
            }
            Outcome::Replaced => {
                log.info(&format!("replaced: {}", spec.description()));
            }
            Outcome::SkippedNotRequired => {
                log.debug(&format!("skipped (not required): {}", spec.description()));
            }
            Outcome::Blocked(reason) => {
                log.error(&format!(
                    "blocked: {} ({reason})",
                    spec.target.display()
                ));
                if !force {
                    log.error("  -> Use --force to replace the existing entry.");
                }
                return Err(BoulderError::LinkConflict {
                    target: spec.target.display().to_string(),
                    reason,
                }
                .into());
            }
        }
    }
    Ok(())
}

/// Report what reconciliation would do, without touching the filesystem.
fn preview_links(config: &Config, force: bool, log: &dyn Log) {
    for spec in config.link_specs() {
        match reconcile(&spec, LinkPolicy::VerifyOnly) {
            Outcome::AlreadyLinked => {
                log.info(&format!("already linked: {}", spec.description()));
            }
            Outcome::SkippedNotRequired => {
                log.dry_run(&format!("would create {}", spec.description()));
            }
            Outcome::Blocked(reason) if reason == "missing" => {
                log.dry_run(&format!("would create {}", spec.description()));
            }
            Outcome::Blocked(reason) => {
                if force {
                    log.dry_run(&format!(
                        "would replace {} ({reason})",
                        spec.target.display()
                    ));
                } else {
                    log.warn(&format!(
                        "blocked: {} ({reason}); use --force to replace it",
                        spec.target.display()
                    ));
                }
            }
            // VerifyOnly never creates or replaces.
            Outcome::Created | Outcome::Replaced => {}
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::resources::probe;

    fn fixture() -> (tempfile::TempDir, Config, Logger) {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::load(&dir.path().join("project"), &dir.path().join("boulder"))
            .expect("load config");
        std::fs::create_dir_all(&config.root).expect("project dir");
        std::fs::create_dir_all(config.rules_source()).expect("rules dir");
        (dir, config, Logger::new("test"))
    }

    #[cfg(unix)]
    #[test]
    fn reconcile_creates_the_rules_link() {
        let (_dir, config, log) = fixture();
        reconcile_project_links(&config, false, &log).unwrap();
        assert!(matches!(
            probe(&config.rules_target()),
            probe::PathState::SymlinkValid(_)
        ));
    }

    #[test]
    fn reconcile_without_force_blocks_on_plain_directory() {
        let (_dir, config, log) = fixture();
        std::fs::create_dir_all(config.rules_target()).unwrap();

        let err = reconcile_project_links(&config, false, &log).unwrap_err();
        assert!(err.to_string().contains("not a symlink"));
        assert!(
            config.rules_target().is_dir(),
            "nothing may be removed without --force"
        );
    }

    #[cfg(unix)]
    #[test]
    fn reconcile_with_force_replaces_broken_link() {
        let (dir, config, log) = fixture();
        std::fs::create_dir_all(config.rules_target().parent().unwrap()).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), config.rules_target()).unwrap();

        reconcile_project_links(&config, true, &log).unwrap();
        match probe(&config.rules_target()) {
            probe::PathState::SymlinkValid(target) => {
                assert_eq!(target, config.rules_source());
            }
            other => panic!("expected a repaired link, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn preview_never_mutates() {
        let (_dir, config, log) = fixture();
        preview_links(&config, true, &log);
        assert_eq!(
            probe(&config.rules_target()),
            probe::PathState::Absent,
            "dry run must not create the link"
        );
    }
}
