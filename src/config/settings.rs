//! User settings for groupsplit
//!
//! Presentation preferences plus the tolerance shared by the balance
//! calculator and the settlement optimizer.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::paths::GroupsplitPaths;
use crate::error::SplitError;
use crate::models::DEFAULT_TOLERANCE;

/// Output format used when a command is not told otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Terminal tables
    #[default]
    Table,
    Json,
    Yaml,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// User settings for groupsplit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Amounts within this distance of zero are treated as settled
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// tracing filter directive used when neither the flag nor the env var is set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub default_format: OutputFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            tolerance: default_tolerance(),
            log_level: default_log_level(),
            default_format: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &GroupsplitPaths) -> Result<Self, SplitError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SplitError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| SplitError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &GroupsplitPaths) -> Result<(), SplitError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SplitError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SplitError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    fn validate(&self) -> Result<(), SplitError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 || self.tolerance >= 1.0 {
            return Err(SplitError::Config(format!(
                "tolerance must be between 0 and 1, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}
