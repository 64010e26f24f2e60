//! Binary entry point for the `boulder` CLI.
use anyhow::Result;
use clap::Parser;

use boulder_cli::cli::{Cli, Command};
use boulder_cli::commands;
use boulder_cli::logging::{self, Logger};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    let command = args.command.name();
    logging::init_subscriber(args.verbose, command);
    let log = std::sync::Arc::new(Logger::new(command));

    match args.command {
        Command::Doctor => commands::doctor::run(&args.global, &log),
        Command::Init(opts) => commands::init::run(&args.global, &opts, &log),
        Command::Version => {
            let version = option_env!("BOULDER_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            println!("boulder {version}");
            Ok(())
        }
    }
}
