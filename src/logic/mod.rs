//! Logic Module - Detection Engine
//!
//! Everything between a raw URL string and a final decision:
//!
//! - `url` - canonicalization helpers
//! - `features/` - lexical measurement (versioned 17-column layout)
//! - `threat/` - heuristic rules + decision policy
//! - `model/` - ONNX classifier bundle + TF-IDF vectorizer
//! - `history` - bounded in-memory decision log
//!
//! Nothing in here knows about HTTP. Handlers call `threat::decide` and
//! `ScanHistory`; the rest is internal plumbing.

pub mod features;
pub mod history;
pub mod model;
pub mod threat;
pub mod url;

use thiserror::Error;

/// Request-scoped pipeline failures
#[derive(Debug, Error)]
pub enum ScanError {
    /// No classifier bundle is loaded. Heuristic-matched URLs still
    /// resolve; everything else lands here.
    #[error("classifier model is not loaded")]
    ModelUnavailable,
    /// The model ran but something in the pass went wrong
    #[error("prediction failed: {0}")]
    Prediction(String),
}

// Re-export the types handlers actually touch
pub use history::{ScanHistory, ScanRecord};
pub use threat::{decide, Decision, DetectionMethod};
