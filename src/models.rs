//! Response payload types.
//!
//! Both payloads are built once at startup and shared read-only across
//! requests. Field declaration order matches the wire format expected by
//! existing consumers, so do not reorder fields.

use serde::{Deserialize, Serialize};

use crate::config::{SERVICE_NAME, WELCOME_MESSAGE};

/// Welcome payload returned by the root endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
}

impl ServiceInfo {
    /// Builds the payload with the crate version baked in.
    pub fn new() -> Self {
        ServiceInfo {
            message: WELCOME_MESSAGE.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// Health payload returned by the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

impl HealthStatus {
    pub fn new() -> Self {
        HealthStatus {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_info_serializes_to_exact_wire_format() {
        let body = serde_json::to_string(&ServiceInfo::new()).expect("should serialize");
        assert_eq!(
            body,
            r#"{"message":"Welcome to Idaho Data API","version":"0.1.0"}"#
        );
    }

    #[test]
    fn health_status_serializes_to_exact_wire_format() {
        let body = serde_json::to_string(&HealthStatus::new()).expect("should serialize");
        assert_eq!(body, r#"{"status":"healthy","service":"idaho-data-api"}"#);
    }
}
