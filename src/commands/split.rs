//! Split command implementation
//!
//! Shows how a file would be partitioned. No precondition checks and no
//! writes, so it works on any file.

use std::path::PathBuf;

use crate::cli::{Part, SplitArgs};
use crate::commands::helpers::print_fragment;
use crate::config::{MigrationConfig, Overrides};
use crate::error::{Result, fs as fs_error};
use crate::partition::Partitioner;

/// Run split command
pub fn run(config_path: Option<PathBuf>, args: SplitArgs) -> Result<()> {
    let config = MigrationConfig::resolve(
        config_path.as_deref(),
        Overrides {
            keys: args.keys.clone(),
            keep_trailing_comments: args.keep_trailing_comments,
            ..Overrides::default()
        },
    )?;

    let document = std::fs::read_to_string(&args.file)
        .map_err(|e| fs_error::read_failed(args.file.display().to_string(), e.to_string()))?;

    let split = Partitioner::new(config.key_names())
        .with_trailing_comments(config.trailing_comments)
        .split(&document);

    tracing::debug!(
        keys = ?split.extracted_keys,
        dropped_blank_lines = split.dropped_blank_lines,
        dropped_trailing_comments = split.dropped_trailing_comments,
        "split file"
    );

    match args.part {
        Part::Extracted => print!("{}", split.extracted),
        Part::Remainder => print!("{}", split.remainder),
        Part::Both => {
            print_fragment("extracted", &split.extracted);
            print_fragment("remainder", &split.remainder);
        }
    }

    Ok(())
}
