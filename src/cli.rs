//! Command-line argument definitions and parsing for the `boulder` binary.

use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the Boulder environment doctor.
#[derive(Parser, Debug)]
#[command(
    name = "boulder",
    about = "Environment doctor and setup tool for Boulder projects",
    version
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared across all subcommands.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Override the project directory (defaults to the current directory)
    #[arg(long, global = true)]
    pub root: Option<std::path::PathBuf>,

    /// Preview changes without applying
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run all environment checks without mutating anything
    Doctor,
    /// Link the shared rules directory into the project, then run doctor
    Init(InitOpts),
    /// Print version information
    Version,
}

impl Command {
    /// Subcommand name used for log-file naming.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Doctor => "doctor",
            Self::Init(_) => "init",
            Self::Version => "version",
        }
    }
}

/// Options for the `init` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct InitOpts {
    /// Replace an existing entry at the link target, even if it is not a
    /// symlink
    #[arg(short, long)]
    pub force: bool,
}
