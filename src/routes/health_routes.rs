//! Health check endpoint.

use axum::{extract::State, routing::any, Json, Router};

use crate::models::HealthStatus;
use crate::state::AppState;

/// Registers health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", any(health_check))
}

/// Reports the service as healthy for any HTTP method.
///
/// The payload is fixed; this is a liveness probe only.
async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(state.health.clone())
}
