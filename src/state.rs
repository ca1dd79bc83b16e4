//! Shared application state.

use std::sync::Arc;

use crate::config::Config;
use crate::models::{HealthStatus, ServiceInfo};

/// Application state shared across all HTTP handlers.
///
/// The two payloads are built here once and never mutated afterwards, so
/// handlers can serve them without any synchronization.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup; the server reads its
    /// bind port from here.
    pub config: Arc<Config>,
    /// Payload served by the root endpoint.
    pub info: ServiceInfo,
    /// Payload served by the health endpoint.
    pub health: HealthStatus,
}

impl AppState {
    /// Creates the application state from the given configuration.
    pub fn new(config: Arc<Config>) -> Self {
        AppState {
            config,
            info: ServiceInfo::new(),
            health: HealthStatus::new(),
        }
    }
}
