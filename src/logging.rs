//! # Logging Module
//!
//! Sets up `tracing` output to stderr and, optionally, a daily rolling file.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{EsbError, Result};

/// Build the level filter
///
/// `RUST_LOG` wins over the configured level when it is set and valid.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global tracing subscriber
///
/// # Returns
///
/// * `Result<Option<WorkerGuard>>` - Guard for the file writer when `log_dir`
///   is set. Keep it alive until exit or buffered lines are lost.
///
/// # Errors
///
/// Returns error if a global subscriber is already installed
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let (file_layer, guard) = if config.log_dir.is_empty() {
        (None, None)
    } else {
        let appender = tracing_appender::rolling::daily(&config.log_dir, &config.file_prefix);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_ansi(false).with_writer(writer);
        (Some(layer), Some(guard))
    };

    tracing_subscriber::registry()
        .with(env_filter(&config.level))
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| EsbError::Logging(e.to_string()))?;

    Ok(guard)
}
