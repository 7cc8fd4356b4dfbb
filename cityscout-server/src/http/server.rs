//! Axum server setup
//!
//! Server skeleton with:
//! - Permissive CORS (browser clients call from any origin)
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::CacheStore;
use crate::upstream::Upstream;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
        }
    }
}

/// Shared application state
pub struct AppState {
    pub store: Arc<dyn CacheStore>,
    pub upstream: Arc<dyn Upstream>,
    /// Cap on films mapped per movie-route miss; `None` maps every result
    pub movies_max_results: Option<usize>,
}

impl AppState {
    pub fn new(store: impl CacheStore, upstream: impl Upstream) -> Self {
        Self {
            store: Arc::new(store),
            upstream: Arc::new(upstream),
            movies_max_results: None,
        }
    }

    pub fn with_movies_max_results(mut self, max: Option<usize>) -> Self {
        self.movies_max_results = max;
        self
    }
}

/// Build the router with every route and middleware layer.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::location::router())
        .merge(routes::weather::router())
        .merge(routes::yelp::router())
        .merge(routes::movies::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server until a shutdown signal arrives.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// let state = AppState::new(PgStore::new(pool), HttpUpstream::new(upstream_config)?);
/// run_server(state, ServerConfig::default()).await?;
/// ```
pub async fn run_server(state: AppState, config: ServerConfig) -> Result<(), ServerError> {
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
