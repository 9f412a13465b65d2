use anyhow::Result;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use code_mentor::config::Config;
use code_mentor::handlers::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Load configuration
    let config = Config::load();
    let state = Arc::new(AppState::new(&config));

    let api = Router::new()
        .route("/generate", post(handlers::generate))
        .route("/health", get(handlers::api_health));

    // The API fronts a browser page, so CORS stays wide open
    let app = Router::new()
        .nest("/api/code", api)
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    tracing::info!(
        bind = %config.server.bind,
        name = %config.server.name,
        version = %config.server.version,
        "starting server"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
