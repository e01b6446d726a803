//! Model Module - Classifier Loading & Inference
//!
//! ## Structure
//! - `bundle`: load + validate `model.onnx` / `manifest.json`
//! - `vectorizer`: trained TF-IDF transform
//! - `inference`: the per-request ONNX forward pass

pub mod bundle;
pub mod inference;
pub mod vectorizer;

// Re-export main types for convenience
pub use bundle::{BundleError, BundleManifest, ModelBundle, MANIFEST_FILE, MODEL_FILE};
pub use vectorizer::{Analyzer, TfidfVectorizer, VectorizerConfig};
