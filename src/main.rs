use std::sync::Arc;

use idaho_data_api::config::load_config;
use idaho_data_api::logging::init_logging;
use idaho_data_api::startup;

#[tokio::main]
async fn main() {
    let config = load_config();

    // Logging failures happen before the subscriber exists, so they go to stderr.
    if let Err(e) = init_logging(&config) {
        eprintln!("Error initializing logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = startup::run(Arc::new(config)).await {
        tracing::error!("Failed to start server: {}", e);
        std::process::exit(1);
    }
}
