//! Features Module - Feature Extraction Engine
//!
//! Lexical measurement of raw URL strings, decoupled from the rule engine
//! and the model. Extending the feature set means touching `layout.rs`
//! first, then `lexical.rs`.

pub mod layout;
pub mod lexical;
pub mod vector;


// Re-export common types
pub use layout::{FEATURE_COUNT, FEATURE_VERSION};
pub use lexical::UrlFeatures;
pub use vector::{FeatureExtractor, FeatureVector};
