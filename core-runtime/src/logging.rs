//! # Logging Bootstrap
//!
//! Configures the `tracing-subscriber` infrastructure for the playback core.
//! Hosts call [`init_logging`] once at startup; core modules then log through
//! the standard `tracing` macros.
//!
//! Credentials (cookie headers, secrets) are never emitted as log fields by
//! core code; modules log only derived facts such as presence flags.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
//!
//! init_logging(LoggingConfig::default().with_format(LogFormat::Compact))?;
//! tracing::info!("core started");
//! ```

use crate::error::{Error, Result};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors.
    Pretty,
    /// Structured JSON format for machine parsing.
    Json,
    /// Compact format for production.
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        return Self::Pretty;

        #[cfg(not(debug_assertions))]
        return Self::Json;
    }
}

/// Minimum log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// Minimum log level when no custom filter is given.
    pub level: LogLevel,
    /// Custom filter string (e.g. `"core_session=debug,core_live=trace"`).
    /// Takes precedence over `level`.
    pub filter: Option<String>,
    /// Display target module in logs.
    pub display_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: LogLevel::Info,
            filter: None,
            display_target: true,
        }
    }
}

impl LoggingConfig {
    /// Set log format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set minimum log level.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set a custom filter string.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

/// Initialize the global tracing subscriber.
///
/// # Errors
///
/// Returns [`Error::Config`] when the filter string is invalid or a global
/// subscriber has already been installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let filter = match &config.filter {
        Some(custom) => EnvFilter::try_new(custom)
            .map_err(|e| Error::Config(format!("invalid log filter: {e}")))?,
        None => EnvFilter::try_new(config.level.as_directive())
            .map_err(|e| Error::Config(format!("invalid log level: {e}")))?,
    };

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_target(config.display_target))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(config.display_target))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_target(config.display_target))
            .try_init(),
    };

    result.map_err(|e| Error::Config(format!("failed to install subscriber: {e}")))
}
