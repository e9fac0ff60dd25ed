use std::sync::Arc;

use axum::{routing::get, Router};
use hub_core::Result;
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod config;
pub mod handlers;
pub mod state;

pub use config::ProxyConfig;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::health))
        .route("/api/news", get(handlers::news))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Runs the proxy until the process is stopped.
pub async fn serve(config: ProxyConfig) -> Result<()> {
    let port = config.port;
    let app = create_app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Server running on http://localhost:{}", port);
    axum::serve(listener, app).await.map_err(hub_core::Error::Io)?;
    Ok(())
}
