//! Domain-specific error types for the Boulder doctor.
//!
//! This module provides the structured failure taxonomy using
//! [`thiserror`]. Internal modules return typed errors while command
//! handlers at the CLI boundary convert them to [`anyhow::Error`] via the
//! standard `?` operator. Checks never let any of these escape: every
//! failure local to a check is folded into its `CheckResult`.
//!
//! # Error taxonomy
//!
//! ```text
//! BoulderError
//! ├── EnvironmentMissing — required tool or file absent
//! ├── ToolBroken         — tool present but errored
//! ├── ConfigInvalid      — manifest missing an entrypoint or unparsable
//! ├── LinkConflict       — reconciliation blocked by an existing entry
//! └── IoFailure          — unexpected filesystem error
//! ```

use thiserror::Error;

/// Top-level error type for the Boulder doctor.
///
/// Every variant carries a remediation hint so that no failure reaches the
/// user as a bare message.
#[derive(Error, Debug)]
pub enum BoulderError {
    /// A required tool or file is absent from the environment.
    #[error("{what} not found. {remedy}")]
    EnvironmentMissing {
        /// What was looked for (e.g. `"bun"`, `"package.json"`).
        what: String,
        /// Actionable text describing how to install or create it.
        remedy: String,
    },

    /// A tool is present but its invocation failed.
    #[error("{tool} is installed but not working: {detail}")]
    ToolBroken {
        /// Name of the failing tool.
        tool: String,
        /// Trimmed output of the failing invocation.
        detail: String,
    },

    /// The project manifest is unparsable or missing a required entrypoint.
    #[error("invalid manifest {path}: {message}")]
    ConfigInvalid {
        /// Path of the offending manifest file.
        path: String,
        /// What was wrong with it.
        message: String,
    },

    /// Symlink reconciliation was blocked by an unexpected existing entry.
    #[error("cannot link {target}: {reason}")]
    LinkConflict {
        /// The link target path that is occupied.
        target: String,
        /// Why the entry could not be reconciled (e.g. `"not a symlink"`).
        reason: String,
    },

    /// An unexpected filesystem operation error.
    #[error("IO error at {path}: {source}")]
    IoFailure {
        /// Path involved in the failing operation.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
