//! Root welcome endpoint.

use axum::{extract::State, routing::any, Json, Router};

use crate::models::ServiceInfo;
use crate::state::AppState;

/// Registers the root route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", any(root))
}

/// Returns the fixed welcome payload for any HTTP method.
async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(state.info.clone())
}
