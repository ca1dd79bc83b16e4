//! HTTP route definitions and handlers.
//!
//! Each endpoint lives in its own module; `create_router` merges them into a
//! single router and attaches the shared state plus the request timeout and
//! tracing layers.

mod health_routes;
mod root_routes;

use std::time::Duration;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Per-request timeout applied uniformly to every connection.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Creates the application router with all configured routes.
///
/// Unmatched paths get axum's default 404 response.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(root_routes::routes())
        .merge(health_routes::routes())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
