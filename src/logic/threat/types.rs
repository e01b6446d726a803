//! Threat Types
//!
//! Core types for URL verdicts. NO logic here - just data structures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Risk levels a heuristic rule can assign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Known-good, no further analysis needed
    Safe,
    /// Worth flagging, user should be warned
    MediumRisk,
    /// Strong phishing signal, block outright
    HighRisk,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "SAFE",
            RiskLevel::MediumRisk => "MEDIUM_RISK",
            RiskLevel::HighRisk => "HIGH_RISK",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskLevel::Safe => 0,
            RiskLevel::MediumRisk => 1,
            RiskLevel::HighRisk => 2,
        }
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, RiskLevel::Safe)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// DETECTION METHOD
// ============================================================================

/// Which stage produced the final call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectionMethod {
    /// One of the deterministic first-stage rules fired
    #[serde(rename = "Heuristic Rule")]
    HeuristicRule,
    /// The ONNX classifier was consulted
    #[serde(rename = "Machine Learning")]
    MachineLearning,
}

impl DetectionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMethod::HeuristicRule => "Heuristic Rule",
            DetectionMethod::MachineLearning => "Machine Learning",
        }
    }
}

impl std::fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// VERDICTS
// ============================================================================

/// Outcome of a heuristic rule hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeuristicVerdict {
    pub risk_level: RiskLevel,
    /// Human-readable rule name, surfaced to the client as-is
    pub reason: String,
    /// Fixed per-rule confidence
    pub confidence: f32,
}

/// Raw classifier output, before the confidence policy is applied
#[derive(Debug, Clone)]
pub struct ClassifierVerdict {
    /// Label with the highest probability
    pub label: String,
    /// That highest probability
    pub confidence: f32,
    /// Full distribution, keyed by label (sorted for stable output)
    pub probabilities: BTreeMap<String, f32>,
}

// ============================================================================
// FINAL DECISION
// ============================================================================

/// Final per-request decision. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    /// The URL exactly as submitted
    pub url: String,
    /// Final label after policy ("benign", "phishing", ...)
    pub prediction: String,
    /// Confidence of the stage that decided (pre-override value)
    pub confidence: f32,
    pub is_safe: bool,
    /// Why this call was made
    pub reason: String,
    pub method: DetectionMethod,
    /// Full label distribution; absent for heuristic decisions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<BTreeMap<String, f32>>,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Safe.severity_level() < RiskLevel::MediumRisk.severity_level());
        assert!(RiskLevel::MediumRisk.severity_level() < RiskLevel::HighRisk.severity_level());
        assert!(RiskLevel::Safe.is_safe());
        assert!(!RiskLevel::HighRisk.is_safe());
    }

    #[test]
    fn test_detection_method_wire_format() {
        let json = serde_json::to_string(&DetectionMethod::HeuristicRule).unwrap();
        assert_eq!(json, "\"Heuristic Rule\"");
        let json = serde_json::to_string(&DetectionMethod::MachineLearning).unwrap();
        assert_eq!(json, "\"Machine Learning\"");
    }

    #[test]
    fn test_decision_omits_empty_probabilities() {
        let decision = Decision {
            url: "https://google.com".into(),
            prediction: "benign".into(),
            confidence: 0.99,
            is_safe: true,
            reason: "Whitelisted domain".into(),
            method: DetectionMethod::HeuristicRule,
            probabilities: None,
        };
        let json = serde_json::to_value(&decision).unwrap();
        assert!(json.get("probabilities").is_none());
        assert_eq!(json["method"], "Heuristic Rule");
    }
}
