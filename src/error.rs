//! Startup error types.
//!
//! The only failure paths in this service are configuration loading and the
//! listener bind; request handlers are infallible.

use thiserror::Error;

/// Errors that can occur while loading configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value '{0}': expected a TCP port number")]
    InvalidPort(String),

    #[error("invalid LOG_LEVEL value '{0}': valid values are trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("configuration error: {0}")]
    Extraction(#[from] figment::Error),
}
