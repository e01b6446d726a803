//! URL-Shield API Server
//!
//! Startup: logging, config, model bundle, router. A missing or broken
//! model bundle is logged and tolerated - the service still answers
//! heuristic scans and reports `model_loaded: false` on /health.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use urlshield_api::config::Config;
use urlshield_api::logic::model::ModelBundle;
use urlshield_api::logic::ScanHistory;
use urlshield_api::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "urlshield_api=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("URL-Shield API starting...");
    tracing::info!("Model dir: {}", config.model_dir.display());

    // Load the classifier bundle; failure is not fatal
    let model = match ModelBundle::load(&config.model_dir) {
        Ok(bundle) => Some(Arc::new(bundle)),
        Err(e) => {
            tracing::warn!("Model load failed: {} - serving heuristic rules only", e);
            None
        }
    };

    // Build application state
    let state = AppState {
        model,
        history: Arc::new(ScanHistory::new(config.history_capacity)),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
