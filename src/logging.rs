//! Tracing subscriber initialization.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;
use crate::error::ConfigError;

/// Initializes the global tracing subscriber from the logging config.
///
/// `log_format` selects between JSON output (for log collectors) and a
/// human-readable console format; unknown formats fall back to console.
pub fn init_logging(config: &Config) -> Result<(), ConfigError> {
    // Parse level string -> LevelFilter
    let level_filter = match config.log_level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => return Err(ConfigError::InvalidLogLevel(config.log_level.clone())),
    };

    // Env-based overrides still apply on top of the configured default.
    let filter_layer = EnvFilter::default().add_directive(level_filter.into());

    match config.log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter_layer)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter_layer)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}
