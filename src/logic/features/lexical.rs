//! Lexical URL features
//!
//! The 17 numeric features the classifier consumes, measured over the RAW
//! request string (before any normalization). `digit_ratio` and `entropy`
//! are computed in f64 and only narrowed when written into the vector.

use once_cell::sync::Lazy;
use regex::Regex;

use super::vector::{FeatureExtractor, FeatureVector};

// ============================================================================
// LEXICAL SIGNALS
// ============================================================================

/// TLDs with a disproportionate share of phishing registrations
pub const SUSPICIOUS_TLDS: &[&str] = &[".tk", ".ml", ".ga", ".cf", ".gq"];

/// Link-shortener hosts that hide the real destination
pub const SHORTENER_HOSTS: &[&str] = &["bit.ly", "goo.gl", "tinyurl"];

/// Dotted-quad IPv4 with octet range checks (0-255)
static IPV4_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(([01]?\d\d?|2[0-4]\d|25[0-5])\.){3}([01]?\d\d?|2[0-4]\d|25[0-5])")
        .expect("ipv4 literal pattern")
});

/// True when the URL contains a dotted-quad IPv4 literal anywhere
pub fn has_ip_literal(url: &str) -> bool {
    IPV4_LITERAL.is_match(url)
}

/// True when the URL carries one of the high-abuse TLDs
pub fn has_suspicious_tld(url: &str) -> bool {
    let lower = url.to_lowercase();
    SUSPICIOUS_TLDS.iter().any(|tld| lower.contains(tld))
}

/// True when the URL goes through a known link shortener
pub fn has_shortener(url: &str) -> bool {
    let lower = url.to_lowercase();
    SHORTENER_HOSTS.iter().any(|host| lower.contains(host))
}

// ============================================================================
// SHANNON ENTROPY
// ============================================================================

/// Shannon entropy over byte values (0-255), in bits per byte.
///
/// Order-invariant by construction: only the byte histogram matters.
/// Empty input yields 0.
pub fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq = [0u32; 256];
    for byte in s.bytes() {
        freq[byte as usize] += 1;
    }

    let len = s.len() as f64;
    let mut entropy = 0.0;
    for &count in freq.iter() {
        if count > 0 {
            let p = count as f64 / len;
            entropy -= p * p.log2();
        }
    }

    entropy
}

// ============================================================================
// URL FEATURES
// ============================================================================

/// The 17 lexical features, one field per layout column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlFeatures {
    pub url_length: usize,
    pub num_dots: usize,
    pub num_hyphens: usize,
    pub num_underscores: usize,
    pub num_slashes: usize,
    pub num_questions: usize,
    pub num_equals: usize,
    pub num_at: usize,
    pub num_ampersands: usize,
    pub num_digits: usize,
    pub digit_ratio: f64,
    pub num_special_chars: usize,
    pub entropy: f64,
    pub use_of_ip: bool,
    pub is_https: bool,
    pub suspicious_tld: bool,
    pub has_shortening: bool,
}

impl UrlFeatures {
    /// Measure a raw URL string. Never fails; the empty string produces
    /// an all-zero set.
    pub fn from_url(url: &str) -> Self {
        let count = |needle: char| url.matches(needle).count();
        let num_digits = url.chars().filter(|c| c.is_ascii_digit()).count();
        let lower = url.to_lowercase();

        Self {
            url_length: url.len(),
            num_dots: count('.'),
            num_hyphens: count('-'),
            num_underscores: count('_'),
            num_slashes: count('/'),
            num_questions: count('?'),
            num_equals: count('='),
            num_at: count('@'),
            num_ampersands: count('&'),
            num_digits,
            digit_ratio: num_digits as f64 / url.len().max(1) as f64,
            num_special_chars: url.chars().filter(|c| !c.is_ascii_alphanumeric()).count(),
            entropy: shannon_entropy(url),
            use_of_ip: has_ip_literal(url),
            // Substring probe, NOT a scheme check: "http://x.com/https-login"
            // sets this flag. The model was trained on the same signal.
            is_https: lower.contains("https"),
            suspicious_tld: has_suspicious_tld(url),
            has_shortening: has_shortener(url),
        }
    }

    /// Materialize into a versioned feature vector in layout order
    pub fn to_vector(&self) -> FeatureVector {
        let mut vector = FeatureVector::new();
        self.extract(&mut vector);
        vector
    }
}

impl FeatureExtractor for UrlFeatures {
    fn extract(&self, vector: &mut FeatureVector) {
        let flag = |b: bool| if b { 1.0 } else { 0.0 };

        vector.set_by_name("url_length", self.url_length as f32);
        vector.set_by_name("num_dots", self.num_dots as f32);
        vector.set_by_name("num_hyphens", self.num_hyphens as f32);
        vector.set_by_name("num_underscores", self.num_underscores as f32);
        vector.set_by_name("num_slashes", self.num_slashes as f32);
        vector.set_by_name("num_questions", self.num_questions as f32);
        vector.set_by_name("num_equals", self.num_equals as f32);
        vector.set_by_name("num_at", self.num_at as f32);
        vector.set_by_name("num_ampersands", self.num_ampersands as f32);
        vector.set_by_name("num_digits", self.num_digits as f32);
        vector.set_by_name("digit_ratio", self.digit_ratio as f32);
        vector.set_by_name("num_special_chars", self.num_special_chars as f32);
        vector.set_by_name("entropy", self.entropy as f32);
        vector.set_by_name("use_of_ip", flag(self.use_of_ip));
        vector.set_by_name("is_https", flag(self.is_https));
        vector.set_by_name("suspicious_tld", flag(self.suspicious_tld));
        vector.set_by_name("has_shortening", flag(self.has_shortening));
    }
}

/// One-call convenience: raw URL → versioned vector
pub fn feature_vector(url: &str) -> FeatureVector {
    UrlFeatures::from_url(url).to_vector()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url_is_all_zero() {
        let features = UrlFeatures::from_url("");
        assert_eq!(features, UrlFeatures::default());
        assert_eq!(features.entropy, 0.0);
        assert_eq!(features.digit_ratio, 0.0);
    }

    #[test]
    fn test_character_counts() {
        let features = UrlFeatures::from_url("https://a-b_c.example.com/p?x=1&y=2");
        assert_eq!(features.num_dots, 2);
        assert_eq!(features.num_hyphens, 1);
        assert_eq!(features.num_underscores, 1);
        assert_eq!(features.num_slashes, 3);
        assert_eq!(features.num_questions, 1);
        assert_eq!(features.num_equals, 2);
        assert_eq!(features.num_ampersands, 1);
        assert_eq!(features.num_digits, 2);
        assert_eq!(features.url_length, 35);
    }

    #[test]
    fn test_digit_ratio() {
        let features = UrlFeatures::from_url("1234");
        assert_eq!(features.digit_ratio, 1.0);

        let features = UrlFeatures::from_url("a1b2");
        assert_eq!(features.digit_ratio, 0.5);
    }

    #[test]
    fn test_ip_literal_detection() {
        assert!(has_ip_literal("http://192.168.1.1/login"));
        assert!(has_ip_literal("10.0.0.1"));
        assert!(!has_ip_literal("example.com"));
        // Three octets are not an address
        assert!(!has_ip_literal("1.2.3"));
    }

    #[test]
    fn test_suspicious_tld_and_shortener() {
        assert!(has_suspicious_tld("http://free-prizes.tk/win"));
        assert!(has_suspicious_tld("HTTP://UPPER.ML"));
        assert!(!has_suspicious_tld("https://example.com"));

        assert!(has_shortener("https://bit.ly/3xYz"));
        assert!(!has_shortener("https://example.com"));
    }

    #[test]
    fn test_is_https_is_a_substring_probe() {
        assert!(UrlFeatures::from_url("https://example.com").is_https);
        // Plain http URL mentioning "https" in the path still trips it
        assert!(UrlFeatures::from_url("http://evil.com/https-login").is_https);
        assert!(!UrlFeatures::from_url("http://example.com").is_https);
    }

    #[test]
    fn test_entropy_order_invariant() {
        // Reversal keeps the byte multiset, so entropy must not move
        let url = "https://example.com/abc";
        let reversed: String = url.chars().rev().collect();
        assert!((shannon_entropy(url) - shannon_entropy(&reversed)).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_known_values() {
        assert_eq!(shannon_entropy(""), 0.0);
        assert_eq!(shannon_entropy("aaaa"), 0.0);
        assert!((shannon_entropy("ab") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_vector_layout_round_trip() {
        let vector = feature_vector("https://192.168.1.1/a?b=c");
        assert_eq!(vector.get_by_name("use_of_ip"), Some(1.0));
        assert_eq!(vector.get_by_name("is_https"), Some(1.0));
        assert_eq!(vector.get_by_name("num_questions"), Some(1.0));
        assert!(vector.is_compatible());
    }
}
