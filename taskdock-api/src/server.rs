//! Server assembly: shared state, route table, and startup.
//!
//! Seven routes map onto the six collection operations: one create
//! route plus find/update/remove keyed by either exact title or
//! completion flag.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use taskdock_store::TaskCollection;

use crate::handlers;

/// Shared server state, constructed once at startup and injected into
/// every handler.
pub struct AppState {
    /// The document collection all handlers operate against.
    pub collection: TaskCollection,
}

impl AppState {
    /// Wraps a collection as server state.
    #[must_use]
    pub const fn new(collection: TaskCollection) -> Self {
        Self { collection }
    }
}

/// Builds the route table over the given state.
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/addOne", post(handlers::create))
        .route(
            "/title/{title}",
            get(handlers::find_by_title)
                .put(handlers::update_by_title)
                .delete(handlers::remove_by_title),
        )
        .route(
            "/completed/{completed}",
            get(handlers::find_by_completed)
                .put(handlers::update_by_completed)
                .delete(handlers::remove_by_completed),
        )
        .with_state(state)
}

/// Starts the API server on the given address with a fresh default
/// collection, returning the bound address and a join handle.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind to the given address.
pub async fn start_server(
    addr: &str,
) -> Result<
    (std::net::SocketAddr, tokio::task::JoinHandle<()>),
    Box<dyn std::error::Error + Send + Sync>,
> {
    start_server_with_state(addr, Arc::new(AppState::new(TaskCollection::new()))).await
}

/// Starts the API server with a pre-configured [`AppState`].
///
/// Use [`TaskCollection::with_max_documents`] to build a collection
/// sized from the resolved [`crate::config::ApiConfig`]. This is the
/// primary entry point used by both `main.rs` and test code (tests bind
/// `127.0.0.1:0` for an OS-assigned port).
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind to the given address.
pub async fn start_server_with_state(
    addr: &str,
    state: Arc<AppState>,
) -> Result<
    (std::net::SocketAddr, tokio::task::JoinHandle<()>),
    Box<dyn std::error::Error + Send + Sync>,
> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "api server error");
        }
    });

    Ok((bound_addr, handle))
}
