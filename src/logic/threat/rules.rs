//! Threat Rules & Thresholds
//!
//! Fixed lists and policy constants for URL classification.
//! NO classify logic here - just data.

use std::collections::HashSet;

use once_cell::sync::Lazy;

// ============================================================================
// LABELS
// ============================================================================

/// Label the classifier and the policy treat as harmless
pub const BENIGN_LABEL: &str = "benign";

/// Label reported when a heuristic flags a URL as unsafe
pub const PHISHING_LABEL: &str = "phishing";

// ============================================================================
// CONFIDENCE CONSTANTS
// ============================================================================

/// Confidence reported for an allow-list hit
pub const WHITELIST_CONFIDENCE: f32 = 0.99;

/// Confidence for the suspicious-TLD + keywords combination
pub const TLD_KEYWORD_CONFIDENCE: f32 = 0.85;

/// Confidence for a raw IP-literal URL
pub const IP_LITERAL_CONFIDENCE: f32 = 0.75;

/// Keyword hits required alongside a suspicious TLD before the rule fires
pub const KEYWORD_HITS_MIN: usize = 2;

/// Non-benign model predictions below this confidence are downgraded
/// to benign (the confidence guard)
pub const LOW_CONFIDENCE_OVERRIDE: f32 = 0.45;

// ============================================================================
// FIXED LISTS
// ============================================================================

/// Domains always treated as safe. Matched against the registrable domain
/// (last two labels), so every subdomain of an entry is covered.
pub static KNOWN_LEGITIMATE_DOMAINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "google.com",
        "youtube.com",
        "facebook.com",
        "github.com",
        "amazon.com",
        "paypal.com",
        "netflix.com",
        "microsoft.com",
        "apple.com",
        "twitter.com",
        "ebay.com",
        "claude.com",
        "linkedin.com",
        "instagram.com",
        "reddit.com",
        "gov.in",
        "wikipedia.org",
        "spotify.com",
        "stackoverflow.com",
        "x.com",
        "twitch.tv",
        "tiktok.com",
        "tumblr.com",
        "pinterest.com",
        "quora.com",
        "ac.in",
        "dropbox.com",
        "telegram.org",
        "phishtank.com",
        "web.whatsapp.com",
        "discord.com",
    ]
    .into_iter()
    .collect()
});

/// Keywords phishing pages lean on, matched case-insensitively anywhere
/// in the URL
pub const PHISHING_KEYWORDS: &[&str] = &[
    "verify",
    "confirm",
    "update",
    "secure",
    "login",
    "suspended",
];

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list_membership() {
        assert!(KNOWN_LEGITIMATE_DOMAINS.contains("google.com"));
        assert!(KNOWN_LEGITIMATE_DOMAINS.contains("web.whatsapp.com"));
        assert!(!KNOWN_LEGITIMATE_DOMAINS.contains("evil.com"));
        assert_eq!(KNOWN_LEGITIMATE_DOMAINS.len(), 31);
    }

    #[test]
    fn test_threshold_sanity() {
        // Guard must sit strictly inside (0, 1) and below every rule confidence
        assert!(LOW_CONFIDENCE_OVERRIDE > 0.0 && LOW_CONFIDENCE_OVERRIDE < 1.0);
        assert!(LOW_CONFIDENCE_OVERRIDE < IP_LITERAL_CONFIDENCE);
        assert!(IP_LITERAL_CONFIDENCE < TLD_KEYWORD_CONFIDENCE);
        assert!(TLD_KEYWORD_CONFIDENCE < WHITELIST_CONFIDENCE);
    }
}
