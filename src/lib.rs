pub mod catalog;
pub mod config;
pub mod db;
pub mod errors;
pub mod http;
mod middleware;
pub mod models;
pub mod state;

use axum::{Router, http::HeaderValue};
use bb8::Pool;
use bb8_redis::RedisConnectionManager;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::{
    config::{Config, StoreKind},
    db::{MemoryStore, RedisStore},
    errors::AppError,
    middleware::cors_layer,
    state::AppState,
};

pub fn create_app(state: AppState, allowed_origins: Vec<HeaderValue>) -> Router {
    Router::new()
        .merge(http::create_http_routes(state))
        .fallback(|| async { AppError::NotFound("Route not found".into()) })
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(allowed_origins)),
        )
}

async fn build_state(config: &Config) -> Result<AppState, AppError> {
    match config.store {
        StoreKind::Redis => {
            let manager = RedisConnectionManager::new(config.redis_url.as_str())?;
            let redis_pool = Pool::builder().build(manager).await?;
            tracing::info!("Using Redis store at {}", config.redis_url);
            Ok(AppState::new(RedisStore::new(redis_pool)))
        }
        StoreKind::Memory => {
            tracing::warn!("Using in-memory store; data is lost on exit");
            Ok(AppState::new(MemoryStore::new()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}

pub async fn start_server() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load()?;
    let state = build_state(&config).await?;
    let app = create_app(state, config.allowed_origins.clone());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!("Server is running on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
