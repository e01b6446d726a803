//! First-Stage Heuristics
//!
//! Deterministic rules evaluated before the model gets involved.
//! First match wins; `None` hands the URL to the classifier.

use crate::logic::features::lexical;
use crate::logic::url;

use super::rules::{
    IP_LITERAL_CONFIDENCE, KEYWORD_HITS_MIN, KNOWN_LEGITIMATE_DOMAINS, PHISHING_KEYWORDS,
    TLD_KEYWORD_CONFIDENCE, WHITELIST_CONFIDENCE,
};
use super::types::{HeuristicVerdict, RiskLevel};

/// Run the fixed rule chain over a raw URL.
///
/// Order matters and is part of the contract:
/// 1. allow-list           → SAFE, 0.99
/// 2. bad TLD + 2 keywords → HIGH_RISK, 0.85
/// 3. IPv4 literal         → MEDIUM_RISK, 0.75
pub fn evaluate(raw_url: &str) -> Option<HeuristicVerdict> {
    let domain = url::extract_domain(raw_url);
    if KNOWN_LEGITIMATE_DOMAINS.contains(domain.as_str()) {
        return Some(HeuristicVerdict {
            risk_level: RiskLevel::Safe,
            reason: "Whitelisted domain".to_string(),
            confidence: WHITELIST_CONFIDENCE,
        });
    }

    if lexical::has_suspicious_tld(raw_url) && keyword_hits(raw_url) >= KEYWORD_HITS_MIN {
        return Some(HeuristicVerdict {
            risk_level: RiskLevel::HighRisk,
            reason: "Suspicious TLD + keywords".to_string(),
            confidence: TLD_KEYWORD_CONFIDENCE,
        });
    }

    if lexical::has_ip_literal(raw_url) {
        return Some(HeuristicVerdict {
            risk_level: RiskLevel::MediumRisk,
            reason: "IP address URL".to_string(),
            confidence: IP_LITERAL_CONFIDENCE,
        });
    }

    None
}

/// How many phishing keywords appear in the URL (case-insensitive)
fn keyword_hits(raw_url: &str) -> usize {
    let lower = raw_url.to_lowercase();
    PHISHING_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .count()
}

// ============================================================================
// TESTS
// ============================================================================
