//! URL-Shield API
//!
//! Malicious-URL detection service: a two-stage pipeline behind a small
//! JSON API.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      URL-SHIELD API                        │
//! ├────────────────────────────────────────────────────────────┤
//! │  POST /api/v1/scan                                         │
//! │        │                                                   │
//! │        ▼                                                   │
//! │  ┌────────────┐  miss   ┌─────────────┐  low conf  ┌─────┐ │
//! │  │ Heuristics │────────▶│ ONNX model  │───────────▶│Guard│ │
//! │  │ (rules)    │         │ (17 + tfidf)│            └─────┘ │
//! │  └─────┬──────┘         └──────┬──────┘               │    │
//! │        │ hit                   │                      │    │
//! │        └───────────┬───────────┴──────────────────────┘    │
//! │                    ▼                                       │
//! │             ┌─────────────┐                                │
//! │             │ ScanHistory │  (bounded, in-memory)          │
//! │             └─────────────┘                                │
//! └────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod logic;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, delete},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};

use crate::logic::model::ModelBundle;
use crate::logic::ScanHistory;

pub use error::{AppError, AppResult};

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// `None` when the bundle failed to load; heuristic scans still work
    pub model: Option<Arc<ModelBundle>>,
    pub history: Arc<ScanHistory>,
    pub config: config::Config,
}

/// Assemble the full router: scan, history, health, plus the standard
/// middleware stack (gzip, request tracing, permissive CORS)
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/scan", post(handlers::scan::scan))
        .route("/api/v1/history", get(handlers::history::list))
        .route("/api/v1/history", delete(handlers::history::clear))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
