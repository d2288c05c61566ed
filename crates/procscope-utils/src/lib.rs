//! # procscope utilities
//!
//! Shared utilities for procscope, mainly the `tracing` based logging setup
//! used by the command line front end.

pub mod logging;

// Re-export commonly used logging functions for convenience
pub use logging::{init_logging, init_logging_with_level, log_format_from_env, LogFormat, LogLevel, LoggingError};
pub use tracing::{debug, error, info, trace, warn};
