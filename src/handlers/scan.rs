//! URL scan handler

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::logic::{threat, ScanRecord};
use crate::{AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub url: String,
}

/// Decide a URL and append the outcome to the scan history.
///
/// The submitted string is taken as-is - no shape validation, the
/// pipeline is total over arbitrary input.
pub async fn scan(
    State(state): State<AppState>,
    Json(req): Json<ScanRequest>,
) -> AppResult<Json<ScanRecord>> {
    let decision = threat::decide(&req.url, state.model.as_deref())?;
    let record = state.history.record(decision);

    tracing::info!(
        url = %record.url,
        prediction = %record.prediction,
        method = %record.method,
        confidence = record.confidence,
        "scan complete"
    );

    Ok(Json(record))
}
