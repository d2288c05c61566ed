//! # Logging Utilities
//!
//! Operational logging for procscope using `tracing`.
//!
//! This is separate from the `PROCSCOPE_DEBUG` trace lines of
//! `procscope_core::debug`. Both go to standard error, which keeps standard
//! output free for command results. Debug lines carry the fixed
//! `procscope-debug> ` prefix, while the logs configured here (and optionally
//! written to a file) carry levels, targets, and timestamps.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use procscope_utils::init_logging;
//!
//! // Initialize with default settings (reads from RUST_LOG env var)
//! init_logging().expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level filter (e.g., `RUST_LOG=debug`, `RUST_LOG=procscope_core=trace`)
//! - `PROCSCOPE_LOG_FORMAT`: Set output format (`json` or `pretty`, default: `pretty`)
//! - `PROCSCOPE_LOG_FILE`: Optional path to a daily rolling log file

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;
use std::{env, io};

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Environment variable selecting the output format
pub const LOG_FORMAT_ENV_VAR: &str = "PROCSCOPE_LOG_FORMAT";

/// Environment variable enabling file logging
pub const LOG_FILE_ENV_VAR: &str = "PROCSCOPE_LOG_FILE";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Keeps the file writer thread alive for the lifetime of the process.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat
{
    /// Pretty-printed, human-readable format (default)
    Pretty,
    /// JSON format, one object per line
    Json,
}

impl FromStr for LogFormat
{
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "pretty" | "dev" | "development" => Ok(LogFormat::Pretty),
            "json" | "prod" | "production" => Ok(LogFormat::Json),
            _ => Err(LoggingError::InvalidFormat(s.to_string())),
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel
{
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level (default)
    Info,
    /// Debug level
    Debug,
    /// Trace level (most verbose)
    Trace,
}

impl From<LogLevel> for Level
{
    fn from(level: LogLevel) -> Self
    {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl FromStr for LogLevel
{
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "error" | "err" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(LoggingError::InvalidLevel(s.to_string())),
        }
    }
}

/// Read the output format from `PROCSCOPE_LOG_FORMAT`
///
/// Defaults to [`LogFormat::Pretty`] when the variable is unset.
///
/// ## Errors
///
/// Returns [`LoggingError::InvalidFormat`] for an unknown format.
pub fn log_format_from_env() -> Result<LogFormat, LoggingError>
{
    log_format_from(env::var(LOG_FORMAT_ENV_VAR).ok().as_deref())
}

fn log_format_from(value: Option<&str>) -> Result<LogFormat, LoggingError>
{
    value.map_or(Ok(LogFormat::Pretty), str::parse)
}

/// Initialize logging with default settings
///
/// Reads configuration from environment variables:
/// - `RUST_LOG`: Log level filter (default: `info`)
/// - `PROCSCOPE_LOG_FORMAT`: Output format (`json` or `pretty`, default: `pretty`)
/// - `PROCSCOPE_LOG_FILE`: Optional path to log file
///
/// ## Errors
///
/// Returns an error if:
/// - Logging is already initialized
/// - `PROCSCOPE_LOG_FORMAT` holds an unknown format
pub fn init_logging() -> Result<(), LoggingError>
{
    let format = log_format_from_env()?;

    // RUST_LOG may hold a directive list rather than a single level, in which
    // case the env filter picks it up below and INFO is only the fallback.
    let default_level = env::var("RUST_LOG")
        .ok()
        .and_then(|value| value.parse::<LogLevel>().ok())
        .map_or(Level::INFO, Into::into);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));
    init_logging_internal(format, filter)
}

/// Initialize logging with explicit level and format
///
/// `RUST_LOG` is ignored; `PROCSCOPE_LOG_FILE` is still honored.
///
/// ## Example
///
/// ```rust,no_run
/// use procscope_utils::{LogFormat, LogLevel, init_logging_with_level};
///
/// init_logging_with_level(LogLevel::Debug, LogFormat::Pretty)
///     .expect("Failed to initialize logging");
/// ```
///
/// ## Errors
///
/// Returns an error if logging is already initialized.
pub fn init_logging_with_level(level: LogLevel, format: LogFormat) -> Result<(), LoggingError>
{
    init_logging_internal(format, EnvFilter::new(Level::from(level).to_string()))
}

fn init_logging_internal(format: LogFormat, filter: EnvFilter) -> Result<(), LoggingError>
{
    let mut layers: Vec<BoxedLayer> = vec![fmt_layer(format, io::stderr, true, filter.clone())];

    if let Some(file_path) = env::var_os(LOG_FILE_ENV_VAR).map(PathBuf::from) {
        let directory = file_path.parent().unwrap_or(Path::new("."));
        let file_name = file_path
            .file_name()
            .ok_or_else(|| LoggingError::InitializationFailed(format!("{} has no file name", file_path.display())))?;

        let file_appender = tracing_appender::rolling::daily(directory, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        if FILE_GUARD.set(guard).is_err() {
            return Err(LoggingError::InitializationFailed("file logging already set up".to_string()));
        }

        // No ANSI in files
        layers.push(fmt_layer(format, non_blocking, false, filter));
    }

    Registry::default()
        .with(layers)
        .try_init()
        .map_err(|e| LoggingError::InitializationFailed(e.to_string()))
}

fn fmt_layer<W>(format: LogFormat, writer: W, ansi: bool, filter: EnvFilter) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true)
        .with_timer(ChronoUtc::rfc_3339())
        .with_ansi(ansi);

    match format {
        LogFormat::Pretty => layer.with_filter(filter).boxed(),
        LogFormat::Json => layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_filter(filter)
            .boxed(),
    }
}

/// Logging initialization error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError
{
    /// Invalid log format
    #[error("Unknown log format: {0}. Use 'pretty' or 'json'")]
    InvalidFormat(String),

    /// Invalid log level
    #[error("Unknown log level: {0}. Use 'error', 'warn', 'info', 'debug', or 'trace'")]
    InvalidLevel(String),

    /// Failed to initialize logging
    #[error("Failed to initialize logging: {0}")]
    InitializationFailed(String),
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_log_format_from_str()
    {
        assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("JSON").unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::from_str("dev").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("prod").unwrap(), LogFormat::Json);
        assert!(matches!(LogFormat::from_str("xml"), Err(LoggingError::InvalidFormat(_))));
    }

    #[test]
    fn test_log_level_from_str()
    {
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);
        assert_eq!(LogLevel::from_str("warning").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("dbg").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert!(matches!(LogLevel::from_str("loud"), Err(LoggingError::InvalidLevel(_))));
    }

    #[test]
    fn test_log_level_to_tracing_level()
    {
        assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
        assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
        assert_eq!(Level::from(LogLevel::Info), Level::INFO);
        assert_eq!(Level::from(LogLevel::Debug), Level::DEBUG);
        assert_eq!(Level::from(LogLevel::Trace), Level::TRACE);
    }

    #[test]
    fn test_log_format_defaults_to_pretty()
    {
        assert_eq!(log_format_from(None).unwrap(), LogFormat::Pretty);
        assert_eq!(log_format_from(Some("json")).unwrap(), LogFormat::Json);
        assert!(matches!(log_format_from(Some("xml")), Err(LoggingError::InvalidFormat(_))));
    }

    #[test]
    fn test_error_messages_name_the_value()
    {
        let error = LogLevel::from_str("loud").unwrap_err();
        assert!(error.to_string().contains("loud"));
    }
}
