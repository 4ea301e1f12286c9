//! # Configuration Management for Valuehaus
//!
//! This crate provides the configuration structures for the value codec:
//! the temporal rendering settings and the display placeholders.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{CodecConfig, DisplayConfig, TemporalConfig};
//!
//! let config = CodecConfig::new(
//!     TemporalConfig::new(
//!         chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
//!         "+02:00".to_string(),
//!     ),
//!     DisplayConfig::default(),
//! );
//! assert_eq!(config.temporal.display_offset, "+02:00");
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [temporal]
//! time_anchor_date = "2000-01-01"
//! display_offset = "+00:00"
//!
//! [display]
//! blob_label = "(BLOB)"
//! null_text = ""
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::CodecConfig;
//!
//! // Load from valuehaus.toml, or defaults when no file is present
//! let config = CodecConfig::load()?;
//!
//! // Or load from custom path
//! let config = CodecConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use chrono::{FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./valuehaus.toml";
const CONFIG_PATH_VAR: &str = "VALUEHAUS_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete codec configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub temporal: TemporalConfig,
    pub display: DisplayConfig,
}

/// Date and time rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalConfig {
    /// Date prefixed to bare `time` values before formatting
    pub time_anchor_date: NaiveDate,
    /// UTC offset used when rendering timestamps, e.g. `+00:00`
    pub display_offset: String,
}

/// Placeholders used in display text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub blob_label: String,
    pub null_text: String,
}

impl CodecConfig {
    /// Create a new codec configuration
    pub fn new(temporal: TemporalConfig, display: DisplayConfig) -> Self {
        Self { temporal, display }
    }

    /// Load configuration from the TOML file named in .env, the default path,
    /// or fall back to defaults when neither exists
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err.into());
            }
        }

        if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            let config = Self::default();
            config.validate()?;
            Ok(config)
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.temporal.offset()?;

        if self.display.blob_label.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Display blob_label cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl TemporalConfig {
    /// Create a new temporal configuration
    pub fn new(time_anchor_date: NaiveDate, display_offset: String) -> Self {
        Self {
            time_anchor_date,
            display_offset,
        }
    }

    /// Parsed display offset
    pub fn offset(&self) -> Result<FixedOffset, ConfigError> {
        self.display_offset.parse().map_err(|_| {
            ConfigError::Invalid(format!(
                "Temporal display_offset '{}' is not a valid UTC offset",
                self.display_offset
            ))
        })
    }
}

impl Default for TemporalConfig {
    fn default() -> Self {
        Self {
            time_anchor_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
            display_offset: "+00:00".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Create a new display configuration
    pub fn new(blob_label: String, null_text: String) -> Self {
        Self {
            blob_label,
            null_text,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            blob_label: "(BLOB)".to_string(),
            null_text: String::new(),
        }
    }
}
