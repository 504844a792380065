//! Unified logging and observability.
//!
//! Logging uses the tracing ecosystem, with structured events, optional file
//! output and privacy controls for transcript text.
//!
//! # Environment Variables
//!
//! - `TURNPLAY_LOG`: Filter directive (like `RUST_LOG`), e.g., `turnplay_core=debug`
//! - `TURNPLAY_LOG_FORMAT`: Output format for stderr: `pretty`, `json`, `compact`
//! - `TURNPLAY_LOG_DIR`: Directory for log files (default `~/.turnplay/logs`)
//!
//! # Configuration
//!
//! Logging is configured via the `[logging]` section in `turnplay.toml`:
//!
//! ```toml
//! [logging]
//! level = "warn"
//! format = "pretty"
//!
//! [logging.file]
//! enabled = false
//! level = "debug"
//! max_files = 5
//!
//! [logging.privacy]
//! log_message_text = "truncate"
//! truncate_length = 80
//! ```
//!
//! # Example
//!
//! ```no_run
//! use turnplay_core::logging;
//!
//! let _guard = logging::init_logging(None)?;
//! # Ok::<(), turnplay_core::Error>(())
//! ```

use crate::Error;
use crate::config::{FileLoggingConfig, LoggingConfig as ConfigLoggingConfig};

use std::env;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Log output format for stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Pretty, human-readable output with colors (default for TTY)
    #[default]
    Pretty,
    /// JSON output (one line per event)
    Json,
    /// Compact, single-line output
    Compact,
}

impl LogFormat {
    /// All available log formats.
    pub const VALUES: &[LogFormat] = &[LogFormat::Pretty, LogFormat::Json, LogFormat::Compact];

    /// Parse a log format from a string.
    pub fn parse_str(s: &str) -> Option<Self> {
        Self::VALUES.iter().copied().find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Get the string representation of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
            LogFormat::Compact => "compact",
        }
    }
}

/// How user and agent message text appears in log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageLogging {
    /// Replace all text with a placeholder.
    None,
    /// Keep the first `truncate_length` chars.
    #[default]
    Truncate,
    /// Log text verbatim.
    Full,
}

impl MessageLogging {
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(MessageLogging::None),
            "truncate" => Some(MessageLogging::Truncate),
            "full" => Some(MessageLogging::Full),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageLogging::None => "none",
            MessageLogging::Truncate => "truncate",
            MessageLogging::Full => "full",
        }
    }
}

impl FromStr for MessageLogging {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageLogging::parse_str(s).ok_or_else(|| format!("invalid message logging: {}", s))
    }
}

/// Privacy configuration for transcript text in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivacyConfig {
    pub log_message_text: MessageLogging,
    /// Maximum chars kept when truncating.
    pub truncate_length: usize,
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        Self { log_message_text: MessageLogging::default(), truncate_length: 80 }
    }
}

/// Logging configuration wrapper that bridges config and logging modules.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level for stderr output.
    pub level: String,
    /// Output format for stderr.
    pub format: LogFormat,
    /// File logging configuration (optional).
    pub file: Option<FileLoggingConfig>,
    /// Privacy controls for transcript text.
    pub privacy: PrivacyConfig,
    /// Emit to stderr. Disabled while a full-screen UI owns the terminal.
    pub stderr: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
            file: None,
            privacy: PrivacyConfig::default(),
            stderr: true,
        }
    }
}

impl From<ConfigLoggingConfig> for LoggingConfig {
    fn from(config: ConfigLoggingConfig) -> Self {
        let format = LogFormat::parse_str(&config.format).unwrap_or_default();
        let log_message_text = MessageLogging::parse_str(&config.privacy.log_message_text).unwrap_or_default();

        Self {
            level: config.level,
            format,
            file: if config.file.enabled { Some(config.file) } else { None },
            privacy: PrivacyConfig { log_message_text, truncate_length: config.privacy.truncate_length },
            stderr: true,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable file logging.
    pub fn with_file_logging(mut self, config: FileLoggingConfig) -> Self {
        self.file = Some(config);
        self
    }

    /// Set privacy configuration.
    pub fn with_privacy(mut self, config: PrivacyConfig) -> Self {
        self.privacy = config;
        self
    }

    /// Route logs to the file appender only.
    pub fn file_only(mut self) -> Self {
        self.stderr = false;
        self
    }

    /// Build an EnvFilter from this config and environment variables.
    fn build_env_filter(&self) -> EnvFilter {
        let filter = env::var("TURNPLAY_LOG")
            .ok()
            .or_else(|| env::var("RUST_LOG").ok())
            .unwrap_or_else(|| self.level.clone());

        EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new(&self.level))
    }

    /// Detect if stderr is a TTY for pretty formatting.
    fn is_tty() -> bool {
        atty::is(atty::Stream::Stderr)
    }

    /// Determine the appropriate format for stderr output.
    fn detect_format(&self) -> LogFormat {
        if let Ok(fmt_str) = env::var("TURNPLAY_LOG_FORMAT")
            && let Some(fmt) = LogFormat::parse_str(&fmt_str)
        {
            return fmt;
        }

        match self.format {
            LogFormat::Pretty if !Self::is_tty() => LogFormat::Compact,
            format => format,
        }
    }

    /// Get the log directory path.
    fn get_log_dir() -> Result<PathBuf, Error> {
        if let Ok(custom_dir) = env::var("TURNPLAY_LOG_DIR") {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .map_err(|_| Error::Config("Could not determine home directory".to_string()))?;

        Ok(PathBuf::from(home).join(".turnplay").join("logs"))
    }
}

/// Keeps the background file writer alive; logs stop flushing once dropped.
#[derive(Debug)]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Sets up:
/// - Environment-based filter (from `TURNPLAY_LOG` or `RUST_LOG`)
/// - Formatted stderr output (pretty, json, or compact) unless disabled
/// - Optional JSON file logging with daily rotation
///
/// Hold the returned [`LogGuard`] for the lifetime of the program.
pub fn init_logging(config: Option<LoggingConfig>) -> Result<LogGuard, Error> {
    let config = config.unwrap_or_default();
    let mut layers: Vec<BoxedLayer> = Vec::new();
    let mut file_guard = None;

    if config.stderr {
        let layer: BoxedLayer = match config.detect_format() {
            LogFormat::Pretty => fmt::layer().pretty().with_writer(io::stderr).with_ansi(true).boxed(),
            LogFormat::Json => fmt::layer().json().with_writer(io::stderr).boxed(),
            LogFormat::Compact => fmt::layer().compact().with_writer(io::stderr).boxed(),
        };
        layers.push(layer.with_filter(config.build_env_filter()).boxed());
    }

    if let Some(file_config) = &config.file {
        let log_dir = LoggingConfig::get_log_dir()?;
        std::fs::create_dir_all(&log_dir)
            .map_err(|e| Error::Config(format!("Failed to create log directory: {}", e)))?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("turnplay")
            .filename_suffix("log")
            .max_log_files(file_config.max_files.max(1))
            .build(&log_dir)
            .map_err(|e| Error::Config(format!("Failed to create log file: {}", e)))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        file_guard = Some(guard);

        let file_filter = EnvFilter::try_new(&file_config.level).unwrap_or_else(|_| EnvFilter::new("debug"));
        layers.push(
            fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(file_filter)
                .boxed(),
        );
    }

    Registry::default()
        .with(layers)
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(LogGuard { _file: file_guard })
}

/// Bound message text in log fields according to privacy settings.
///
/// `None` redacts every message regardless of length.
pub fn redact_message(content: &str, privacy: &PrivacyConfig) -> String {
    match privacy.log_message_text {
        MessageLogging::None => "[REDACTED]".to_string(),
        MessageLogging::Truncate => {
            let total = content.chars().count();
            if total <= privacy.truncate_length {
                return content.to_string();
            }
            let mut truncated = content.chars().take(privacy.truncate_length).collect::<String>();
            truncated.push_str("...");
            truncated.push_str(&format!(" ({} total chars)", total));
            truncated
        }
        MessageLogging::Full => content.to_string(),
    }
}

/// Sanitize file paths for logging (replace the home directory with `~`).
pub fn sanitize_path(path: &std::path::Path) -> String {
    if let Ok(home) = env::var("HOME")
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        return format!("~/{}", stripped.display());
    }

    path.display().to_string()
}
