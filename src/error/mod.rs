//! Error types and handling for cfgmigrate
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped by error domain:
//! - [`fs`]: File system errors
//! - [`config`]: Configuration errors
//!
//! Unmet migration preconditions (destination already present, source
//! missing) are not errors; see [`crate::operations::Outcome`].

pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for cfgmigrate operations
#[derive(Error, Diagnostic, Debug)]
pub enum MigrateError {
    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(cfgmigrate::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(
        code(cfgmigrate::fs::write_failed),
        help("Check that the target directory is writable (the migration usually needs root)")
    )]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to move '{from}' to '{to}': {reason}")]
    #[diagnostic(code(cfgmigrate::fs::move_failed))]
    FileMoveFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(cfgmigrate::fs::dir_create_failed))]
    DirCreateFailed { path: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(cfgmigrate::config::not_found),
        help("Pass --config with an existing file, or omit it to use the built-in defaults")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(cfgmigrate::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(cfgmigrate::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(cfgmigrate::config::invalid))]
    ConfigInvalid { message: String },
}

impl From<serde_yaml::Error> for MigrateError {
    fn from(err: serde_yaml::Error) -> Self {
        MigrateError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MigrateError>;
