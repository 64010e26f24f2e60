#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::panic,
    clippy::indexing_slicing
)]
//! Integration tests for the init flow: link reconciliation over isolated
//! temporary projects, covering the create / blocked / force-replace
//! scenarios end to end.

mod common;

use boulder_cli::commands::init::reconcile_project_links;
use boulder_cli::logging::Logger;
use boulder_cli::resources::{LinkPolicy, Outcome, PathState, probe, reconcile};

use common::ProjectFixture;

// ---------------------------------------------------------------------------
// Fresh project
// ---------------------------------------------------------------------------

/// On a fresh project, init creates the rules link inside the editor
/// directory, and a later verify sees it as already linked.
#[cfg(unix)]
#[test]
fn init_creates_rules_link_on_fresh_project() {
    let fixture = ProjectFixture::new();
    let config = fixture.config();
    let log = Logger::new("test");

    reconcile_project_links(&config, false, &log).expect("reconcile");

    match probe(&config.rules_target()) {
        PathState::SymlinkValid(target) => assert_eq!(target, config.rules_source()),
        other => panic!("expected a valid link, got {other:?}"),
    }
    assert_eq!(
        reconcile(&config.rules_link_spec(), LinkPolicy::VerifyOnly),
        Outcome::AlreadyLinked
    );
}

/// Running init twice is a no-op the second time.
#[cfg(unix)]
#[test]
fn init_is_idempotent() {
    let fixture = ProjectFixture::new();
    let config = fixture.config();
    let log = Logger::new("test");

    reconcile_project_links(&config, false, &log).expect("first run");
    reconcile_project_links(&config, false, &log).expect("second run");

    assert!(matches!(
        probe(&config.rules_target()),
        PathState::SymlinkValid(_)
    ));
}

// ---------------------------------------------------------------------------
// Occupied target
// ---------------------------------------------------------------------------

/// A plain directory at the link target blocks init without --force, and
/// nothing is removed.
#[test]
fn init_without_force_blocks_on_existing_directory() {
    let fixture = ProjectFixture::new();
    let config = fixture.config();
    std::fs::create_dir_all(config.rules_target()).expect("occupy target");
    std::fs::write(config.rules_target().join("keep.md"), "user data").expect("write file");
    let log = Logger::new("test");

    let err = reconcile_project_links(&config, false, &log).expect_err("must be blocked");

    assert!(err.to_string().contains("not a symlink"));
    assert!(
        config.rules_target().join("keep.md").exists(),
        "user data must survive a blocked init"
    );
}

/// The same directory is replaced when --force is given.
#[cfg(unix)]
#[test]
fn init_with_force_replaces_existing_directory() {
    let fixture = ProjectFixture::new();
    let config = fixture.config();
    std::fs::create_dir_all(config.rules_target()).expect("occupy target");
    let log = Logger::new("test");

    reconcile_project_links(&config, true, &log).expect("forced reconcile");

    assert!(matches!(
        probe(&config.rules_target()),
        PathState::SymlinkValid(_)
    ));
}

/// A broken link is repaired under --force, and a subsequent doctor-style
/// verify reports it as already linked.
#[cfg(unix)]
#[test]
fn init_with_force_repairs_broken_link() {
    let fixture = ProjectFixture::new();
    let config = fixture.config();
    let target = config.rules_target();
    std::fs::create_dir_all(target.parent().expect("parent")).expect("editor dir");
    std::os::unix::fs::symlink(fixture.root().join("gone"), &target).expect("broken link");
    let log = Logger::new("test");

    reconcile_project_links(&config, true, &log).expect("forced reconcile");

    assert_eq!(
        reconcile(&config.rules_link_spec(), LinkPolicy::VerifyOnly),
        Outcome::AlreadyLinked
    );
}

// ---------------------------------------------------------------------------
// Declarative extra links
// ---------------------------------------------------------------------------

/// `[[links]]` entries in boulder.toml are reconciled after the built-in
/// rules link.
#[cfg(unix)]
#[test]
fn init_reconciles_extra_links_from_settings() {
    let fixture = ProjectFixture::new();
    fixture.write_settings(
        "[[links]]\nsource = \"prompts\"\ntarget = \".cursor/prompts\"\n",
    );
    std::fs::create_dir_all(fixture.boulder_home().join("prompts")).expect("prompts dir");
    let config = fixture.config();
    let log = Logger::new("test");

    reconcile_project_links(&config, false, &log).expect("reconcile");

    let extra = fixture.root().join(".cursor").join("prompts");
    match probe(&extra) {
        PathState::SymlinkValid(target) => {
            assert_eq!(target, fixture.boulder_home().join("prompts"));
        }
        other => panic!("expected extra link, got {other:?}"),
    }
}
