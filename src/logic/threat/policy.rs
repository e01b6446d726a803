//! Decision Policy
//!
//! Glues the two stages together: heuristics first, classifier second,
//! with the low-confidence override applied to model output. This is the
//! single entry point request handlers call.

use crate::logic::model::ModelBundle;
use crate::logic::ScanError;

use super::heuristics;
use super::rules::{BENIGN_LABEL, LOW_CONFIDENCE_OVERRIDE, PHISHING_LABEL};
use super::types::{ClassifierVerdict, Decision, DetectionMethod};

/// Decide a URL.
///
/// The classifier only runs when no heuristic rule fires; an allow-listed
/// URL therefore resolves even while the model is missing. With no rule
/// hit and no model, the scan fails with `ModelUnavailable`.
pub fn decide(raw_url: &str, bundle: Option<&ModelBundle>) -> Result<Decision, ScanError> {
    if let Some(verdict) = heuristics::evaluate(raw_url) {
        let is_safe = verdict.risk_level.is_safe();
        let prediction = if is_safe { BENIGN_LABEL } else { PHISHING_LABEL };
        return Ok(Decision {
            url: raw_url.to_string(),
            prediction: prediction.to_string(),
            confidence: verdict.confidence,
            is_safe,
            reason: verdict.reason,
            method: DetectionMethod::HeuristicRule,
            probabilities: None,
        });
    }

    let bundle = bundle.ok_or(ScanError::ModelUnavailable)?;
    let verdict = bundle.predict(raw_url)?;
    Ok(apply_confidence_guard(raw_url, verdict))
}

/// Apply the low-confidence override to a raw classifier verdict.
///
/// A non-benign label below the guard is reported as benign, and the
/// reason spells out the downgrade. The reported confidence stays at the
/// model's value either way, and the full distribution is passed through
/// untouched.
pub fn apply_confidence_guard(raw_url: &str, verdict: ClassifierVerdict) -> Decision {
    let ClassifierVerdict {
        label,
        confidence,
        probabilities,
    } = verdict;

    let (prediction, reason) = if label != BENIGN_LABEL && confidence < LOW_CONFIDENCE_OVERRIDE {
        (
            BENIGN_LABEL.to_string(),
            format!(
                "Low Risk (Model Confidence {:.1}% too low)",
                confidence * 100.0
            ),
        )
    } else {
        (label, "ML Model Prediction".to_string())
    };

    let is_safe = prediction == BENIGN_LABEL;

    Decision {
        url: raw_url.to_string(),
        prediction,
        confidence,
        is_safe,
        reason,
        method: DetectionMethod::MachineLearning,
        probabilities: Some(probabilities),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn verdict(label: &str, confidence: f32) -> ClassifierVerdict {
        let mut probabilities = BTreeMap::new();
        probabilities.insert("benign".to_string(), 1.0 - confidence);
        probabilities.insert(label.to_string(), confidence);
        ClassifierVerdict {
            label: label.to_string(),
            confidence,
            probabilities,
        }
    }

    #[test]
    fn test_low_confidence_prediction_downgrades_to_benign() {
        let decision = apply_confidence_guard("http://odd.example", verdict("malware", 0.30));
        assert_eq!(decision.prediction, "benign");
        assert!(decision.is_safe);
        assert_eq!(decision.reason, "Low Risk (Model Confidence 30.0% too low)");
        // Confidence reports the model's value, not the overridden one
        assert_eq!(decision.confidence, 0.30);
        assert_eq!(decision.method, DetectionMethod::MachineLearning);
    }

    #[test]
    fn test_confident_prediction_passes_through() {
        let decision = apply_confidence_guard("http://bad.example", verdict("phishing", 0.92));
        assert_eq!(decision.prediction, "phishing");
        assert!(!decision.is_safe);
        assert_eq!(decision.reason, "ML Model Prediction");
    }

    #[test]
    fn test_guard_threshold_is_strict() {
        // Exactly at the guard value: not overridden
        let decision =
            apply_confidence_guard("http://edge.example", verdict("phishing", LOW_CONFIDENCE_OVERRIDE));
        assert_eq!(decision.prediction, "phishing");
    }

    #[test]
    fn test_benign_is_never_overridden() {
        // Low-confidence benign stays benign with the plain reason
        let decision = apply_confidence_guard("http://meh.example", verdict("benign", 0.10));
        assert_eq!(decision.prediction, "benign");
        assert_eq!(decision.reason, "ML Model Prediction");
        assert!(decision.is_safe);
    }

    #[test]
    fn test_distribution_survives_override() {
        let decision = apply_confidence_guard("http://odd.example", verdict("defacement", 0.20));
        let probabilities = decision.probabilities.unwrap();
        assert_eq!(probabilities.get("defacement").copied(), Some(0.20));
    }

    #[test]
    fn test_heuristic_urls_resolve_without_a_model() {
        let decision = decide("https://github.com/rust-lang/rust", None).unwrap();
        assert_eq!(decision.method, DetectionMethod::HeuristicRule);
        assert_eq!(decision.prediction, "benign");
        assert!(decision.is_safe);
        assert!(decision.probabilities.is_none());
    }

    #[test]
    fn test_unsafe_heuristic_maps_to_phishing_label() {
        let decision = decide("http://185.22.1.9/secure", None).unwrap();
        assert_eq!(decision.prediction, "phishing");
        assert!(!decision.is_safe);
        assert_eq!(decision.reason, "IP address URL");
        assert_eq!(decision.confidence, 0.75);
    }

    #[test]
    fn test_model_required_when_no_rule_fires() {
        let err = decide("https://some-random-site.org", None).unwrap_err();
        assert!(matches!(err, ScanError::ModelUnavailable));
    }
}
