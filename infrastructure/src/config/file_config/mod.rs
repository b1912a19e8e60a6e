//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod terminology;

pub use terminology::FileTerminologyConfig;

use serde::{Deserialize, Serialize};
use stepwise_domain::OutputFormat;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("terminology.default_system cannot be empty")]
    EmptyDefaultSystem,

    #[error("terminology.missing_code cannot be empty")]
    EmptyMissingCode,

    #[error("terminology.value_set_dir is not a directory: {0}")]
    NotADirectory(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Terminology fallbacks and value set lookup
    pub terminology: FileTerminologyConfig,
    /// Report settings
    pub output: FileOutputConfig,
}

/// `[output]` section: how the resolution report is printed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Outline, summary or json; the CLI default applies when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.terminology.default_system.trim().is_empty() {
            return Err(ConfigValidationError::EmptyDefaultSystem);
        }
        if self.terminology.missing_code.is_empty() {
            return Err(ConfigValidationError::EmptyMissingCode);
        }
        if let Some(dir) = &self.terminology.value_set_dir {
            if dir.exists() && !dir.is_dir() {
                return Err(ConfigValidationError::NotADirectory(
                    dir.display().to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
