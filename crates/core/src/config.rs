use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::logging::{LogFormat, MessageLogging};

/// Playback presentation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaybackConfig {
    /// Transcript to open when none is given on the command line
    #[serde(default)]
    pub transcript: Option<PathBuf>,

    /// Show each step's simulated delay
    #[serde(default = "default_true")]
    pub show_delays: bool,

    /// Show the roster of agents seen in the transcript
    #[serde(default = "default_true")]
    pub show_agents: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { transcript: None, show_delays: true, show_agents: true }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive for stderr output
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty`, `json` or `compact`
    #[serde(default = "default_log_format")]
    pub format: String,

    #[serde(default)]
    pub file: FileLoggingConfig,

    #[serde(default)]
    pub privacy: PrivacyLoggingConfig,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: FileLoggingConfig::default(),
            privacy: PrivacyLoggingConfig::default(),
        }
    }
}

/// `[logging.file]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileLoggingConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_file_log_level")]
    pub level: String,

    /// Rotated daily files to keep
    #[serde(default = "default_max_files")]
    pub max_files: usize,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self { enabled: false, level: default_file_log_level(), max_files: default_max_files() }
    }
}

/// `[logging.privacy]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrivacyLoggingConfig {
    /// `none`, `truncate` or `full`
    #[serde(default = "default_message_logging")]
    pub log_message_text: String,

    #[serde(default = "default_truncate_length")]
    pub truncate_length: usize,
}

impl Default for PrivacyLoggingConfig {
    fn default() -> Self {
        Self { log_message_text: default_message_logging(), truncate_length: default_truncate_length() }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_file_log_level() -> String {
    "debug".to_string()
}

fn default_max_files() -> usize {
    5
}

fn default_message_logging() -> String {
    "truncate".to_string()
}

fn default_truncate_length() -> usize {
    80
}

/// Root configuration structure for turnplay.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str).map_err(|e| Error::Config(ConfigError::from(e).to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load from `path` when it exists, otherwise fall back to defaults
    pub fn from_file_or_default(path: &Path) -> Result<Self> {
        if path.exists() { Self::from_file(path) } else { Ok(Self::default()) }
    }

    fn validate(&self) -> Result<()> {
        if LogFormat::parse_str(&self.logging.format).is_none() {
            return Err(Error::Config(
                ConfigError::InvalidLogFormat(self.logging.format.clone()).to_string(),
            ));
        }

        if MessageLogging::parse_str(&self.logging.privacy.log_message_text).is_none() {
            return Err(Error::Config(
                ConfigError::InvalidMessageLogging(self.logging.privacy.log_message_text.clone()).to_string(),
            ));
        }

        Ok(())
    }

    /// Get example configuration (as a string)
    pub fn example() -> &'static str {
        r#"# Turnplay Configuration Example
# Copy this file to turnplay.toml and customize as needed

[playback]
# Transcript to open when no file is passed on the command line (optional)
# transcript = "demo/session.json"
# Show simulated step delays next to processing steps
show_delays = true
# Show the roster of agents in the header
show_agents = true

[logging]
# Filter directive for stderr (overridden by TURNPLAY_LOG / RUST_LOG)
level = "warn"
# Output format: "pretty", "json", or "compact"
format = "pretty"

[logging.file]
# Write JSON logs to ~/.turnplay/logs (or TURNPLAY_LOG_DIR)
enabled = false
level = "debug"
max_files = 5

[logging.privacy]
# How message text appears in logs: "none", "truncate", or "full"
log_message_text = "truncate"
truncate_length = 80
"#
    }
}

/// Configuration-specific errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid log format
    #[error("invalid log format: {0}")]
    InvalidLogFormat(String),

    /// Invalid message logging mode
    #[error("invalid message logging mode: {0}")]
    InvalidMessageLogging(String),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::TomlParse(err.to_string())
    }
}
