//! Scan history handlers

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::logic::ScanRecord;
use crate::AppState;

/// List recent scans, oldest first
pub async fn list(State(state): State<AppState>) -> Json<Vec<ScanRecord>> {
    Json(state.history.snapshot())
}

/// Drop every stored scan
pub async fn clear(State(state): State<AppState>) -> Json<Value> {
    let dropped = state.history.len();
    state.history.clear();

    tracing::info!(dropped, "scan history cleared");

    Json(json!({ "message": "History cleared" }))
}
