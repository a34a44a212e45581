//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ConfigError;

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Directory generated footprint files are written to.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Style settings for generated footprints.
    #[serde(default)]
    pub style: StyleConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Invalid logging level '{}'. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                ),
            });
        }

        if self.style.solder_mask_margin < 0.0 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Solder mask margin must not be negative, got {}",
                    self.style.solder_mask_margin
                ),
            });
        }
        Ok(())
    }
}

/// Style configuration for generated footprints.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    /// Solder mask margin applied to every pad, in mm.
    #[serde(default = "default_solder_mask_margin")]
    pub solder_mask_margin: f64,

    /// Prefix prepended to the footprint's search tags.
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            solder_mask_margin: default_solder_mask_margin(),
            tag_prefix: default_tag_prefix(),
        }
    }
}

fn default_solder_mask_margin() -> f64 {
    0.25
}

fn default_tag_prefix() -> String {
    "zacc footprint".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
