//! Configuration file parsing.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration loaded from a TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"debug"` or `"lambdas=trace"`.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
    /// `"stderr"` or a file path to append to.
    pub output: String,
    /// Use ANSI colors when writing to a terminal.
    pub color: bool,
    /// Include timestamps.
    pub timestamps: bool,
    /// Include the event target.
    pub target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Text,
            output: "stderr".to_string(),
            color: true,
            timestamps: true,
            target: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(path.as_ref().display().to_string(), e))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }
}

/// Configuration error.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file '{0}': {1}")]
    Io(String, #[source] std::io::Error),
    /// TOML parse error.
    #[error("Failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}
