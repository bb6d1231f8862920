//! Migrate operation module
//!
//! Moves the configured keys out of the source file into the destination
//! file. The run is guarded so it happens at most once per host: an existing
//! destination or a missing source stops it before anything is written.

pub mod verify;

use std::fs;
use std::path::PathBuf;

use crate::cli::MigrateArgs;
use crate::common::fs::{move_file, write_atomic, write_new};
use crate::config::{AuxiliaryMove, MigrationConfig};
use crate::error::{Result, fs as fs_error};
use crate::partition::{Partitioner, Split};
use crate::transaction::Transaction;

pub use verify::Verification;

/// Configuration options for migrate
#[derive(Debug, Clone, Default)]
pub struct MigrateOptions {
    /// Split and report without writing anything
    pub dry_run: bool,
}

impl From<&MigrateArgs> for MigrateOptions {
    fn from(args: &MigrateArgs) -> Self {
        Self {
            dry_run: args.dry_run,
        }
    }
}

/// What a completed migration did
#[derive(Debug, Clone)]
pub struct Report {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub split: Split,
    pub verification: Verification,
    /// Auxiliary file moved (or that would be moved, on a dry run)
    pub auxiliary: Option<AuxiliaryMove>,
    pub dry_run: bool,
}

/// Result of a migration attempt
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The source was split and both files written
    Migrated(Report),
    /// Destination already present; nothing was done
    DestinationExists(PathBuf),
    /// Source does not exist; nothing was done
    SourceMissing(PathBuf),
}

/// High-level migrate operation
pub struct MigrateOperation<'a> {
    config: &'a MigrationConfig,
    options: MigrateOptions,
}

impl<'a> MigrateOperation<'a> {
    pub fn new(config: &'a MigrationConfig, options: MigrateOptions) -> Self {
        Self { config, options }
    }

    pub fn execute(&self) -> Result<Outcome> {
        let config = self.config;

        if config.destination.exists() {
            tracing::info!(path = %config.destination.display(), "destination already exists");
            return Ok(Outcome::DestinationExists(config.destination.clone()));
        }

        if !config.source.is_file() {
            tracing::info!(path = %config.source.display(), "source does not exist");
            return Ok(Outcome::SourceMissing(config.source.clone()));
        }

        let document = fs::read_to_string(&config.source).map_err(|e| {
            fs_error::read_failed(config.source.display().to_string(), e.to_string())
        })?;

        let split = Partitioner::new(config.key_names())
            .with_trailing_comments(config.trailing_comments)
            .split(&document);
        log_split(&split);

        let verification = verify::verify(&split.extracted, &config.keys, &split.extracted_keys);
        log_verification(&verification);

        let auxiliary = config
            .auxiliary
            .as_ref()
            .filter(|aux| aux.from.exists())
            .cloned();

        if !self.options.dry_run {
            self.write(&split, auxiliary.as_ref())?;
        }

        Ok(Outcome::Migrated(Report {
            source: config.source.clone(),
            destination: config.destination.clone(),
            split,
            verification,
            auxiliary,
            dry_run: self.options.dry_run,
        }))
    }

    fn write(&self, split: &Split, auxiliary: Option<&AuxiliaryMove>) -> Result<()> {
        let config = self.config;
        let mut transaction = Transaction::new();

        if let Some(parent) = config.destination.parent() {
            transaction.create_dir_all(parent)?;
        }
        write_new(&config.destination, &split.extracted)?;
        transaction.track_file_created(&config.destination);
        tracing::info!(path = %config.destination.display(), "wrote extracted settings");

        transaction.backup_file(&config.source)?;
        write_atomic(&config.source, &split.remainder)?;
        tracing::info!(path = %config.source.display(), "rewrote source without extracted settings");

        if let Some(aux) = auxiliary {
            if let Some(parent) = aux.to.parent() {
                transaction.create_dir_all(parent)?;
            }
            if aux.to.is_file() {
                transaction.backup_file(&aux.to)?;
            }
            move_file(&aux.from, &aux.to)?;
            transaction.track_move(&aux.from, &aux.to);
            tracing::info!(
                from = %aux.from.display(),
                to = %aux.to.display(),
                "moved auxiliary file"
            );
        }

        transaction.commit();
        Ok(())
    }
}

fn log_split(split: &Split) {
    tracing::debug!(
        keys = ?split.extracted_keys,
        extracted_bytes = split.extracted.len(),
        remainder_bytes = split.remainder.len(),
        "split source"
    );
    if split.dropped_blank_lines > 0 {
        tracing::debug!(
            count = split.dropped_blank_lines,
            "blank lines are not carried into either file"
        );
    }
    if split.dropped_trailing_comments > 0 {
        tracing::warn!(
            count = split.dropped_trailing_comments,
            "comment lines at end of source dropped (use --keep-trailing-comments to keep them)"
        );
    }
}

fn log_verification(verification: &Verification) {
    if let Some(reason) = &verification.parse_error {
        tracing::warn!(%reason, "extracted settings are not valid YAML");
    }
    for key in &verification.missing_keys {
        tracing::warn!(%key, "key missing or empty in extracted settings");
    }
    for key in &verification.duplicate_keys {
        tracing::warn!(%key, "key extracted more than once");
    }
}
