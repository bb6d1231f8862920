//! Migration configuration
//!
//! All paths and the key list live in [`MigrationConfig`]. Defaults match the
//! layout of a Cacophony device: the combined uploader config in `/etc` and
//! the device config under `/etc/cacophony`. A YAML file can override any
//! field, and command-line flags override the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MigrateError, Result, config};
use crate::partition::TrailingComments;

/// Combined config the device settings are migrated out of
pub const DEFAULT_SOURCE: &str = "/etc/thermal-uploader.yaml";
/// Device config the settings are migrated into
pub const DEFAULT_DESTINATION: &str = "/etc/cacophony/device.yaml";
/// Private settings file that pairs with the combined config
pub const DEFAULT_AUX_FROM: &str = "/etc/thermal-uploader-priv.yaml";
/// New home of the private settings file
pub const DEFAULT_AUX_TO: &str = "/etc/cacophony/device-priv.yaml";
/// Keys that identify a device
pub const DEFAULT_KEYS: [&str; 3] = ["server-url", "group", "device-name"];

/// A file moved alongside the migration when it exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuxiliaryMove {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl Default for AuxiliaryMove {
    fn default() -> Self {
        Self {
            from: PathBuf::from(DEFAULT_AUX_FROM),
            to: PathBuf::from(DEFAULT_AUX_TO),
        }
    }
}

/// Everything the migration needs to know
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct MigrationConfig {
    /// Combined YAML file; rewritten with the remainder
    pub source: PathBuf,
    /// New YAML file receiving the extracted keys; must not exist yet
    pub destination: PathBuf,
    /// Top-level keys to extract
    pub keys: Vec<String>,
    /// Optional sibling file to relocate (`null` disables)
    pub auxiliary: Option<AuxiliaryMove>,
    /// What to do with comments dangling at end of the source
    pub trailing_comments: TrailingComments,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            destination: PathBuf::from(DEFAULT_DESTINATION),
            keys: DEFAULT_KEYS.iter().map(|k| (*k).to_string()).collect(),
            auxiliary: Some(AuxiliaryMove::default()),
            trailing_comments: TrailingComments::default(),
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    pub keys: Vec<String>,
    pub aux_from: Option<PathBuf>,
    pub aux_to: Option<PathBuf>,
    pub no_aux: bool,
    pub keep_trailing_comments: bool,
}

impl MigrationConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config::not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;

        tracing::debug!(path = %path.display(), "loaded configuration file");

        Self::from_yaml(&content).map_err(|e| match e {
            MigrateError::ConfigParseFailed { reason, .. } => {
                config::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Load from `path` if given, otherwise start from defaults
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the current values
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(source) = overrides.source {
            self.source = source;
        }
        if let Some(destination) = overrides.destination {
            self.destination = destination;
        }
        if !overrides.keys.is_empty() {
            self.keys = overrides.keys;
        }

        if overrides.no_aux {
            self.auxiliary = None;
        } else if overrides.aux_from.is_some() || overrides.aux_to.is_some() {
            let mut aux = self.auxiliary.take().unwrap_or_default();
            if let Some(from) = overrides.aux_from {
                aux.from = from;
            }
            if let Some(to) = overrides.aux_to {
                aux.to = to;
            }
            self.auxiliary = Some(aux);
        }

        if overrides.keep_trailing_comments {
            self.trailing_comments = TrailingComments::Remainder;
        }
    }

    /// Reject configurations the migration cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.keys.is_empty() {
            return Err(config::invalid("key list is empty"));
        }

        for key in &self.keys {
            if key.is_empty() {
                return Err(config::invalid("key names must not be empty"));
            }
            if key.chars().any(|c| c.is_whitespace() || c == ':') {
                return Err(config::invalid(format!(
                    "key '{key}' contains whitespace or ':' and can never match"
                )));
            }
        }

        if self.source == self.destination {
            return Err(config::invalid(format!(
                "source and destination are the same file: {}",
                self.source.display()
            )));
        }

        if let Some(aux) = &self.auxiliary {
            if aux.from == aux.to {
                return Err(config::invalid(format!(
                    "auxiliary move source and target are the same file: {}",
                    aux.from.display()
                )));
            }
            if aux.from == self.source {
                return Err(config::invalid(format!(
                    "auxiliary move would take away the source file: {}",
                    aux.from.display()
                )));
            }
            if aux.to == self.source || aux.to == self.destination {
                return Err(config::invalid(format!(
                    "auxiliary move would overwrite a migrated file: {}",
                    aux.to.display()
                )));
            }
        }

        Ok(())
    }

    /// Key names as string slices
    pub fn key_names(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}
