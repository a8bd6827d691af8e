//! `taskdock` API server -- minimal task CRUD over a document collection.
//!
//! An axum HTTP server binding seven routes to the six operations of a
//! task document collection. The collection is constructed once at
//! startup and shared across all in-flight requests.
//!
//! # Usage
//!
//! ```bash
//! # Run on default address 0.0.0.0:8080
//! cargo run --bin taskdock-api
//!
//! # Run on custom address
//! cargo run --bin taskdock-api -- --bind 127.0.0.1:3000
//!
//! # Or via environment variable
//! TASKDOCK_ADDR=127.0.0.1:3000 cargo run --bin taskdock-api
//! ```

use std::sync::Arc;

use clap::Parser;
use taskdock_api::config::{ApiCliArgs, ApiConfig};
use taskdock_api::server::{self, AppState};
use taskdock_store::TaskCollection;

#[tokio::main]
async fn main() {
    let cli = ApiCliArgs::parse();

    // Load config from CLI args + config file + env vars + defaults.
    let config = match ApiConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing with the resolved log level.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(addr = %config.bind_addr, "starting taskdock api server");

    let collection = TaskCollection::with_max_documents(config.max_documents);
    let state = Arc::new(AppState::new(collection));

    match server::start_server_with_state(&config.bind_addr, state).await {
        Ok((bound_addr, handle)) => {
            tracing::info!(addr = %bound_addr, "api server listening");
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "api server task failed");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to start api server");
            std::process::exit(1);
        }
    }
}
