pub mod handlers;
pub mod types;

use crate::{Result, config::Config, model::PlaceholderModel};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Builds the router with the placeholder model wired in.
pub fn app() -> Router {
    let app_state = handlers::AppState {
        model: Arc::new(PlaceholderModel::new()),
    };

    Router::new()
        .route("/health", get(handlers::health))
        .route("/infer", post(handlers::infer))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    let app = app();

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
