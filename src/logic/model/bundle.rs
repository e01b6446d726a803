//! Model Bundle - Load & Validate
//!
//! A bundle directory holds `model.onnx` plus `manifest.json`. Everything
//! is checked here, once, at load time: label list, feature schema,
//! vectorizer state, and the declared probability output. Request-time
//! code gets a typed, trusted `ModelBundle` and never re-validates.

use std::fs;
use std::io::Read;
use std::path::Path;

use ort::session::{builder::GraphOptimizationLevel, Session};
use parking_lot::RwLock;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::logic::features::layout;

use super::vectorizer::{TfidfVectorizer, VectorizerConfig, VectorizerError};

/// File names inside a bundle directory
pub const MODEL_FILE: &str = "model.onnx";
pub const MANIFEST_FILE: &str = "manifest.json";

fn default_probabilities_output() -> String {
    "probabilities".to_string()
}

// ============================================================================
// MANIFEST
// ============================================================================

/// `manifest.json` contents
#[derive(Debug, Clone, Deserialize)]
pub struct BundleManifest {
    /// Free-form model version string
    pub version: String,
    /// Class labels in the model's output order
    pub labels: Vec<String>,
    /// Numeric feature columns, must match the compiled layout exactly
    pub feature_cols: Vec<String>,
    /// Trained TF-IDF state
    pub vectorizer: VectorizerConfig,
    /// Name of the graph output carrying the probability tensor
    #[serde(default = "default_probabilities_output")]
    pub probabilities_output: String,
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("bundle io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("manifest parse error: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("manifest rejected: {0}")]
    Invalid(String),
    #[error(transparent)]
    Vectorizer(#[from] VectorizerError),
    #[error("onnx session error: {0}")]
    Session(String),
}

// ============================================================================
// BUNDLE
// ============================================================================

/// Loaded, validated classifier package.
///
/// Immutable for the process lifetime; the session lock only serializes
/// `run` calls, which need `&mut Session`.
pub struct ModelBundle {
    pub(super) session: RwLock<Session>,
    pub(super) vectorizer: TfidfVectorizer,
    pub(super) labels: Vec<String>,
    pub(super) output_name: String,
    /// Version string straight from the manifest
    pub version: String,
    /// SHA-256 of `model.onnx`, hex-encoded
    pub checksum: String,
}

impl ModelBundle {
    /// Load a bundle directory. Fails fast on any inconsistency - a half
    /// valid bundle must never serve predictions.
    pub fn load(dir: &Path) -> Result<Self, BundleError> {
        let manifest_path = dir.join(MANIFEST_FILE);
        let model_path = dir.join(MODEL_FILE);

        let manifest: BundleManifest = serde_json::from_str(&fs::read_to_string(manifest_path)?)?;

        if manifest.labels.is_empty() {
            return Err(BundleError::Invalid("labels list is empty".to_string()));
        }
        layout::validate_schema(&manifest.feature_cols)
            .map_err(|e| BundleError::Invalid(e.to_string()))?;
        let vectorizer = TfidfVectorizer::new(manifest.vectorizer)?;

        let checksum = sha256_file(&model_path)?;

        let session = Session::builder()
            .map_err(|e| BundleError::Session(format!("Failed to create session builder: {e}")))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| BundleError::Session(format!("Failed to set optimization: {e}")))?
            .commit_from_file(&model_path)
            .map_err(|e| BundleError::Session(format!("Failed to load model: {e}")))?;

        let output_name = manifest.probabilities_output;
        if !session.outputs.iter().any(|o| o.name == output_name) {
            return Err(BundleError::Invalid(format!(
                "model has no output named '{output_name}'"
            )));
        }

        tracing::info!(
            version = %manifest.version,
            checksum = %checksum,
            labels = manifest.labels.len(),
            text_dim = vectorizer.dimension(),
            "model bundle loaded"
        );

        Ok(Self {
            session: RwLock::new(session),
            vectorizer,
            labels: manifest.labels,
            output_name,
            version: manifest.version,
            checksum,
        })
    }

    /// Class labels in model output order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Width of the full model input (numeric block + text block)
    pub fn input_width(&self) -> usize {
        layout::FEATURE_COUNT + self.vectorizer.dimension()
    }
}

impl std::fmt::Debug for ModelBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBundle")
            .field("version", &self.version)
            .field("checksum", &self.checksum)
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}

/// SHA-256 of a file, streamed in 8 KB chunks
fn sha256_file(path: &Path) -> Result<String, std::io::Error> {
    let mut file = fs::File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

// ============================================================================
// TESTS
// ============================================================================
