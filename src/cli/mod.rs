//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - migrate: Migrate command arguments
//! - split: Split command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod migrate;
pub mod split;

pub use completions::CompletionsArgs;
pub use migrate::MigrateArgs;
pub use split::{Part, SplitArgs};

/// cfgmigrate - move device settings into their own config file
#[derive(Parser, Debug)]
#[command(
    name = "cfgmigrate",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Move device settings out of a combined YAML config, keeping their comments",
    long_about = "cfgmigrate splits the device keys (server-url, group, device-name) out of \
                  /etc/thermal-uploader.yaml into /etc/cacophony/device.yaml. Comments above a \
                  key move with it and every other line is left byte for byte. The migration \
                  runs at most once: it does nothing when the device config already exists.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  cfgmigrate                             \x1b[90m# Migrate with built-in defaults\x1b[0m\n   \
                  cfgmigrate migrate --dry-run           \x1b[90m# Show both files without writing\x1b[0m\n   \
                  cfgmigrate --config paths.yaml migrate \x1b[90m# Use paths and keys from a file\x1b[0m\n   \
                  cfgmigrate split config.yaml -k group  \x1b[90m# Inspect how a file would split\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file with paths and keys (defaults are built in)
    #[arg(long, short = 'c', global = true, env = "CFGMIGRATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the migration (default)
    Migrate(MigrateArgs),

    /// Print how a file splits, without touching it
    Split(SplitArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
