//! HTTP boundary.
//!
//! # Endpoints
//!
//! | Method | Path                 | Success body                        |
//! |--------|----------------------|-------------------------------------|
//! | GET    | `/geocoding`         | `{"latitude":..,"longitude":..}`    |
//! | GET    | `/reverse-geocoding` | numeric address token (text/plain)  |
//! | DELETE | `/cache/:cache_name` | `Cache cleared successfully.`       |
//! | GET    | `/cache/list`        | cache name → keys or message        |
//!
//! Failures use the body described in [`error`].

pub mod error;

mod params;
mod routes;
mod state;

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

pub use error::{ApiError, ErrorBody, INTERNAL_ERROR_MESSAGE};
pub use routes::CACHE_CLEARED;
pub use state::ServerState;

/// Build the router with all endpoints.
pub fn build_router(state: ServerState) -> Router {
    routes::create_router(state)
}

/// Serve `router` on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish after `shutdown` fires.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(addr = %addr, "Listening");
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped gracefully");
    Ok(())
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    }
}
