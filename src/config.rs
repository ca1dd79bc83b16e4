//! Environment-sourced configuration.
//!
//! The service is configured entirely through environment variables, so the
//! figment profile merges compiled-in defaults with a handful of env
//! overrides rather than a config file.

use figment::providers::Serialized;
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8080;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "idaho-data-api";

/// Welcome message returned by the root endpoint.
pub const WELCOME_MESSAGE: &str = "Welcome to Idaho Data API";

/// Runtime configuration, resolved once at startup.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    /// TCP port the listener binds to.
    pub port: u16,
    /// Log level: "trace", "debug", "info", "warn" or "error".
    pub log_level: String,
    /// Log output format: "json" or "console".
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
            log_format: "console".to_string(),
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// `PORT` selects the listen port and falls back to 8080 when unset or
    /// empty. `LOG_LEVEL` and `LOG_FORMAT` tune the tracing subscriber.
    pub fn from_env() -> Result<Config, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if let Some(port) = non_empty_var("PORT") {
            let port: u16 = port
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
            figment = figment.merge(Serialized::global("port", port));
        }
        if let Some(level) = non_empty_var("LOG_LEVEL") {
            figment = figment.merge(Serialized::global("log_level", level));
        }
        if let Some(format) = non_empty_var("LOG_FORMAT") {
            figment = figment.merge(Serialized::global("log_format", format));
        }

        Ok(figment.extract()?)
    }
}

/// Load config from the environment, exiting the process on error.
pub fn load_config() -> Config {
    match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns the trimmed value of an env var, treating empty as absent.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset() {
        figment::Jail::expect_with(|_jail| {
            let config = Config::from_env().expect("config should load");
            assert_eq!(config.port, DEFAULT_PORT);
            Ok(())
        });
    }

    #[test]
    fn port_defaults_when_empty() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PORT", "");
            let config = Config::from_env().expect("config should load");
            assert_eq!(config.port, DEFAULT_PORT);
            Ok(())
        });
    }

    #[test]
    fn port_defaults_when_whitespace() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PORT", "   ");
            let config = Config::from_env().expect("config should load");
            assert_eq!(config.port, DEFAULT_PORT);
            Ok(())
        });
    }

    #[test]
    fn port_honors_env_value() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PORT", "9090");
            let config = Config::from_env().expect("config should load");
            assert_eq!(config.port, 9090);
            Ok(())
        });
    }

    #[test]
    fn invalid_port_is_rejected() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PORT", "not-a-port");
            let err = Config::from_env().expect_err("config should fail");
            assert!(matches!(err, ConfigError::InvalidPort(_)));
            Ok(())
        });
    }

    #[test]
    fn logging_overrides_are_honored() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LOG_LEVEL", "debug");
            jail.set_env("LOG_FORMAT", "json");
            let config = Config::from_env().expect("config should load");
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.log_format, "json");
            Ok(())
        });
    }
}
