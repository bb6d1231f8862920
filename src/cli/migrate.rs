use clap::Parser;
use std::path::PathBuf;

use crate::config::Overrides;

/// Arguments for the migrate command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Migrate with the built-in defaults:\n    cfgmigrate migrate\n\n\
                  Preview the result:\n    cfgmigrate migrate --dry-run\n\n\
                  Migrate other paths and keys:\n    cfgmigrate migrate --source a.yaml --destination b.yaml -k id -k owner\n\n\
                  Skip the private settings file:\n    cfgmigrate migrate --no-aux")]
pub struct MigrateArgs {
    /// Combined config to split (rewritten with the remaining lines)
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Device config to create
    #[arg(long, value_name = "PATH")]
    pub destination: Option<PathBuf>,

    /// Key to extract; repeat for several (replaces the configured list)
    #[arg(long = "key", short = 'k', value_name = "KEY")]
    pub keys: Vec<String>,

    /// File to move alongside the migration when present
    #[arg(long, value_name = "PATH")]
    pub aux_from: Option<PathBuf>,

    /// Where the auxiliary file goes
    #[arg(long, value_name = "PATH")]
    pub aux_to: Option<PathBuf>,

    /// Do not move the auxiliary file
    #[arg(long, conflicts_with_all = ["aux_from", "aux_to"])]
    pub no_aux: bool,

    /// Keep comment lines at the end of the source instead of dropping them
    #[arg(long)]
    pub keep_trailing_comments: bool,

    /// Show both resulting files without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl From<&MigrateArgs> for Overrides {
    fn from(args: &MigrateArgs) -> Self {
        Self {
            source: args.source.clone(),
            destination: args.destination.clone(),
            keys: args.keys.clone(),
            aux_from: args.aux_from.clone(),
            aux_to: args.aux_to.clone(),
            no_aux: args.no_aux,
            keep_trailing_comments: args.keep_trailing_comments,
        }
    }
}
