//! Threat Module
//!
//! Two-stage URL classification. This is the CORE STEP - where a URL
//! becomes a benign/phishing call.
//!
//! ## Structure
//! - `types`: Core types (RiskLevel, Decision, verdicts)
//! - `rules`: Allow-list, keyword list, thresholds
//! - `heuristics`: Deterministic first-stage rules
//! - `policy`: Final decision assembly + low-confidence override
//!
//! ## Usage
//! ```ignore
//! use crate::logic::threat::{decide, DetectionMethod};
//!
//! let decision = decide("https://google.com", model.as_deref())?;
//! match decision.method {
//!     DetectionMethod::HeuristicRule => println!("rule: {}", decision.reason),
//!     DetectionMethod::MachineLearning => println!("model: {}", decision.prediction),
//! }
//! ```

pub mod heuristics;
pub mod policy;
pub mod rules;
pub mod types;

// Re-export main types for convenience
pub use types::{ClassifierVerdict, Decision, DetectionMethod, HeuristicVerdict, RiskLevel};

pub use rules::{BENIGN_LABEL, LOW_CONFIDENCE_OVERRIDE, PHISHING_LABEL};

pub use policy::{apply_confidence_guard, decide};
