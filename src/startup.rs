//! Application startup and server initialization.
//!
//! Builds the shared state and router, binds the TCP listener, and serves
//! requests until the process is killed.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::routes;
use crate::state::AppState;

/// Initializes and runs the application server.
///
/// Binds to `0.0.0.0` on the configured port and serves requests until the
/// process is killed. There is no shutdown coordination.
///
/// # Errors
///
/// Returns an error if the listener fails to bind (port in use, permission
/// denied) or the server loop exits with an error.
pub async fn run(config: Arc<Config>) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(config);
    let port = state.config.port;
    let app = routes::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    info!("Starting Idaho Data API server on port {}", port);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
