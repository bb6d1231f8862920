//! cfgmigrate - device config migration
//!
//! Moves the device settings out of the thermal uploader's combined YAML
//! config into their own file, keeping the comments that document them and
//! leaving every other line untouched.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod logging;
mod operations;
mod partition;
mod transaction;

use cli::{Cli, Commands, MigrateArgs};

fn main() {
    let cli = Cli::parse();
    logging::init_from_args(&cli);

    tracing::debug!("cfgmigrate v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        None => commands::migrate::run(cli.config, MigrateArgs::default()),
        Some(Commands::Migrate(args)) => commands::migrate::run(cli.config, args),
        Some(Commands::Split(args)) => commands::split::run(cli.config, args),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
