//! HTTP front end for the read-through proxy

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::cache::MediaProxy;
use crate::client::GraphQlApi;
use crate::error::Result;

mod error;
mod routes;

use routes::AppState;

/// All routes, listed explicitly.
pub fn router<C: GraphQlApi + 'static>(state: AppState<C>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/media/:id", get(routes::read_media::<C>))
        .route("/media/user/:user_name", get(routes::read_user::<C>))
        .route("/media/search/:query", get(routes::search_media::<C>))
        .with_state(state)
}

/// Serve until Ctrl-C or SIGTERM, then close the store.
pub async fn serve<C: GraphQlApi + 'static>(proxy: MediaProxy<C>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);

    let state = Arc::new(proxy);
    axum::serve(listener, router(Arc::clone(&state)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped, closing cache");
    match Arc::try_unwrap(state) {
        Ok(proxy) => proxy.shutdown(),
        Err(_) => {
            log::warn!("Proxy still referenced after shutdown, cache closes on drop");
            Ok(())
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                log::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    log::info!("Shutdown signal received");
}
