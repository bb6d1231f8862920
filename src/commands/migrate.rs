//! Migrate command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::MigrateArgs;
use crate::commands::helpers::{format_keys, print_fragment};
use crate::config::{MigrationConfig, Overrides};
use crate::error::Result;
use crate::operations::migrate::Report;
use crate::operations::{MigrateOperation, MigrateOptions, Outcome};

/// Run migrate command
pub fn run(config_path: Option<PathBuf>, args: MigrateArgs) -> Result<()> {
    let config = MigrationConfig::resolve(config_path.as_deref(), Overrides::from(&args))?;
    tracing::debug!(?config, "resolved migration config");

    let outcome = MigrateOperation::new(&config, MigrateOptions::from(&args)).execute()?;

    match outcome {
        Outcome::DestinationExists(path) => {
            println!("{} already exists", path.display());
        }
        Outcome::SourceMissing(path) => {
            println!("{} does not exist", path.display());
        }
        Outcome::Migrated(report) if report.dry_run => display_dry_run(&report),
        Outcome::Migrated(report) => display_report(&report),
    }

    Ok(())
}

fn display_dry_run(report: &Report) {
    print_fragment(&report.destination.display().to_string(), &report.split.extracted);
    print_fragment(&report.source.display().to_string(), &report.split.remainder);
    if let Some(aux) = &report.auxiliary {
        println!(
            "{} would move {} to {}",
            Style::new().dim().apply_to("#"),
            aux.from.display(),
            aux.to.display()
        );
    }
}

fn display_report(report: &Report) {
    let label = Style::new().bold();
    let warn = Style::new().yellow();

    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Migrated"),
        format_keys(&report.split.extracted_keys)
    );
    println!("  {} {}", label.apply_to("to:  "), report.destination.display());
    println!("  {} {}", label.apply_to("from:"), report.source.display());
    if let Some(aux) = &report.auxiliary {
        println!(
            "  {} {} -> {}",
            label.apply_to("moved:"),
            aux.from.display(),
            aux.to.display()
        );
    }

    if report.verification.is_clean() {
        return;
    }
    if report.verification.parse_error.is_some() {
        println!(
            "{} extracted settings are not valid YAML",
            warn.apply_to("warning:")
        );
    }
    if !report.verification.missing_keys.is_empty() {
        println!(
            "{} missing or empty: {}",
            warn.apply_to("warning:"),
            format_keys(&report.verification.missing_keys)
        );
    }
    if !report.verification.duplicate_keys.is_empty() {
        println!(
            "{} extracted more than once: {}",
            warn.apply_to("warning:"),
            format_keys(&report.verification.duplicate_keys)
        );
    }
}
