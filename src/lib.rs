//! Boulder project environment doctor.
//!
//! Diagnoses and repairs the environment of a Boulder-convention project:
//! the Bun toolchain, the Biome formatter/linter, the project manifest, and
//! the symlink that connects the project-local editor rules directory to the
//! shared rules directory under the user's Boulder home.
//!
//! The public API is organised into four layers:
//!
//! - **[`resources`]** — pure filesystem primitives: path probing and
//!   symlink reconciliation
//! - **[`checks`]** — named, ordered diagnostic checks aggregated into a
//!   report
//! - **[`config`]** — project context: `boulder.toml` settings and the
//!   `package.json` manifest
//! - **[`commands`]** — top-level subcommand orchestration (`doctor`,
//!   `init`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod checks;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod platform;
pub mod resources;
