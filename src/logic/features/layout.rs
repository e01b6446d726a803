//! Feature Layout - the classifier's column contract
//!
//! The model was trained against these 17 columns in this exact order.
//! Reordering, renaming, adding or dropping a column without bumping
//! `FEATURE_VERSION` silently corrupts every prediction, so the layout
//! lives here, in one place, and everything else derives from it.
//!
//! Model bundles declare their column list in the manifest; a bundle
//! that disagrees with this file is rejected at load time.

use crc32fast::Hasher;

// ============================================================================
// LAYOUT
// ============================================================================

/// Bump on any layout change, including pure reorders
pub const FEATURE_VERSION: u8 = 1;

/// Column names, in vector order. Nothing else defines the order.
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Length / counts (0-9) ===
    "url_length",        // 0: Total length of the raw URL string
    "num_dots",          // 1: Count of '.'
    "num_hyphens",       // 2: Count of '-'
    "num_underscores",   // 3: Count of '_'
    "num_slashes",       // 4: Count of '/'
    "num_questions",     // 5: Count of '?'
    "num_equals",        // 6: Count of '='
    "num_at",            // 7: Count of '@'
    "num_ampersands",    // 8: Count of '&'
    "num_digits",        // 9: Count of ASCII digits

    // === Ratios / distribution (10-12) ===
    "digit_ratio",       // 10: num_digits / url_length
    "num_special_chars", // 11: Count of non-alphanumeric characters
    "entropy",           // 12: Shannon entropy over byte values

    // === Boolean flags (13-16) ===
    "use_of_ip",         // 13: Host looks like a raw IPv4 literal
    "is_https",          // 14: "https" appears anywhere in the URL
    "suspicious_tld",    // 15: Carries a high-abuse TLD
    "has_shortening",    // 16: Known link-shortener host
];

/// Column count; must equal `FEATURE_LAYOUT.len()`
pub const FEATURE_COUNT: usize = 17;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 over the version byte plus every column name (NUL-separated).
/// Two builds agree on this value exactly when they agree on the layout.
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[FEATURE_VERSION]);
    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]);
    }
    hasher.finalize()
}

// ============================================================================
// VALIDATION
// ============================================================================

/// A feature vector was built against some other layout
#[derive(Debug, Clone)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

impl std::fmt::Display for LayoutMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Feature layout mismatch: expected v{} (hash: {:08x}), got v{} (hash: {:08x})",
            self.expected_version, self.expected_hash, self.actual_version, self.actual_hash
        )
    }
}

impl std::error::Error for LayoutMismatchError {}

/// Check a vector's stamped version and hash against the current layout
pub fn validate_layout(version: u8, hash: u32) -> Result<(), LayoutMismatchError> {
    let expected_hash = layout_hash();
    if version == FEATURE_VERSION && hash == expected_hash {
        Ok(())
    } else {
        Err(LayoutMismatchError {
            expected_version: FEATURE_VERSION,
            expected_hash,
            actual_version: version,
            actual_hash: hash,
        })
    }
}

/// A model manifest declares a different column schema
#[derive(Debug, Clone)]
pub struct SchemaMismatchError {
    pub position: usize,
    pub expected: String,
    pub actual: String,
}

impl std::fmt::Display for SchemaMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Feature schema mismatch at column {}: expected '{}', got '{}'",
            self.position, self.expected, self.actual
        )
    }
}

impl std::error::Error for SchemaMismatchError {}

/// Compare a manifest's numeric column list against the layout, position
/// by position. Count and names must match exactly.
pub fn validate_schema(columns: &[String]) -> Result<(), SchemaMismatchError> {
    if columns.len() != FEATURE_COUNT {
        return Err(SchemaMismatchError {
            position: columns.len().min(FEATURE_COUNT),
            expected: format!("{} columns", FEATURE_COUNT),
            actual: format!("{} columns", columns.len()),
        });
    }

    for (i, column) in columns.iter().enumerate() {
        if column != FEATURE_LAYOUT[i] {
            return Err(SchemaMismatchError {
                position: i,
                expected: FEATURE_LAYOUT[i].to_string(),
                actual: column.clone(),
            });
        }
    }

    Ok(())
}

// ============================================================================
// LOOKUP
// ============================================================================

/// Index of a column name, linear scan over the 17 names
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Column name at an index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_and_count_agree() {
        assert_eq!(FEATURE_COUNT, 17);
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_layout_has_no_duplicate_names() {
        for (i, name) in FEATURE_LAYOUT.iter().enumerate() {
            assert_eq!(feature_index(name), Some(i), "duplicate column: {name}");
        }
    }

    #[test]
    fn test_layout_hash_is_stable_and_nonzero() {
        assert_eq!(layout_hash(), layout_hash());
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_validate_layout_accepts_current() {
        assert!(validate_layout(FEATURE_VERSION, layout_hash()).is_ok());
    }

    #[test]
    fn test_validate_layout_rejects_version_bump() {
        assert!(validate_layout(FEATURE_VERSION + 1, layout_hash()).is_err());
    }

    #[test]
    fn test_validate_layout_rejects_foreign_hash() {
        assert!(validate_layout(FEATURE_VERSION, layout_hash() ^ 1).is_err());
    }

    #[test]
    fn test_validate_schema_accepts_exact_layout() {
        let columns: Vec<String> = FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect();
        assert!(validate_schema(&columns).is_ok());
    }

    #[test]
    fn test_validate_schema_rejects_truncated_list() {
        let columns: Vec<String> = FEATURE_LAYOUT[..10].iter().map(|s| s.to_string()).collect();
        assert!(validate_schema(&columns).is_err());
    }

    #[test]
    fn test_validate_schema_reports_first_bad_position() {
        let mut columns: Vec<String> = FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect();
        columns.swap(0, 1);
        let err = validate_schema(&columns).unwrap_err();
        assert_eq!(err.position, 0);
        assert_eq!(err.expected, "url_length");
    }

    #[test]
    fn test_feature_index_round_trips() {
        assert_eq!(feature_index("url_length"), Some(0));
        assert_eq!(feature_index("digit_ratio"), Some(10));
        assert_eq!(feature_index("has_shortening"), Some(16));
        assert_eq!(feature_index("nonexistent"), None);

        assert_eq!(feature_name(0), Some("url_length"));
        assert_eq!(feature_name(16), Some("has_shortening"));
        assert_eq!(feature_name(100), None);
    }
}
