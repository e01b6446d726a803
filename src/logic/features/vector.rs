//! Versioned feature vector
//!
//! A `[f32; 17]` stamped with the layout version and hash it was built
//! against. The stamp travels with the values, so a vector produced by
//! one build can be checked before another build feeds it to a model.

use serde::{Deserialize, Serialize};

use super::layout::{
    layout_hash, validate_layout, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION,
    LayoutMismatchError,
};

// ============================================================================
// FEATURE VECTOR
// ============================================================================

/// Fixed-width numeric features in `FEATURE_LAYOUT` order, stamped with
/// the layout they were extracted under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureVector {
    pub version: u8,
    pub layout_hash: u32,
    /// One value per layout column
    pub values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    /// All-zero vector stamped with the current layout
    pub fn new() -> Self {
        Self::from_values([0.0; FEATURE_COUNT])
    }

    pub fn from_values(values: [f32; FEATURE_COUNT]) -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        }
    }

    /// Write one column. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, value: f32) {
        if index < FEATURE_COUNT {
            self.values[index] = value;
        }
    }

    /// Write the column with this layout name; `false` if no such column
    pub fn set_by_name(&mut self, name: &str, value: f32) -> bool {
        match super::layout::feature_index(name) {
            Some(index) => {
                self.set(index, value);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        super::layout::feature_index(name).and_then(|i| self.get(i))
    }

    pub fn as_array(&self) -> &[f32; FEATURE_COUNT] {
        &self.values
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Does the stamp match the layout this build was compiled with?
    pub fn validate(&self) -> Result<(), LayoutMismatchError> {
        validate_layout(self.version, self.layout_hash)
    }

    pub fn is_compatible(&self) -> bool {
        self.validate().is_ok()
    }

    /// Column names, aligned with `values`
    pub fn feature_names(&self) -> &'static [&'static str] {
        FEATURE_LAYOUT
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[f32; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f32; FEATURE_COUNT]) -> Self {
        Self::from_values(values)
    }
}

// ============================================================================
// FEATURE EXTRACTOR TRAIT
// ============================================================================

/// Anything that can fill columns of a feature vector
pub trait FeatureExtractor {
    fn extract(&self, vector: &mut FeatureVector);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vector_is_zeroed_and_stamped() {
        let vector = FeatureVector::new();
        assert_eq!(vector.version, FEATURE_VERSION);
        assert_eq!(vector.layout_hash, layout_hash());
        assert!(vector.values.iter().all(|&v| v == 0.0));
        assert!(vector.is_compatible());
    }

    #[test]
    fn test_set_and_get_by_name() {
        let mut vector = FeatureVector::new();
        assert!(vector.set_by_name("url_length", 42.0));
        assert!(!vector.set_by_name("no_such_column", 1.0));

        assert_eq!(vector.get_by_name("url_length"), Some(42.0));
        assert_eq!(vector.get(0), Some(42.0));
        assert_eq!(vector.get_by_name("no_such_column"), None);
    }

    #[test]
    fn test_out_of_range_set_is_ignored() {
        let mut vector = FeatureVector::new();
        vector.set(FEATURE_COUNT + 5, 9.0);
        assert!(vector.values.iter().all(|&v| v == 0.0));
        assert_eq!(vector.get(FEATURE_COUNT + 5), None);
    }

    #[test]
    fn test_stale_stamp_fails_validation() {
        let mut vector = FeatureVector::new();
        vector.version = FEATURE_VERSION + 1;
        assert!(!vector.is_compatible());
        assert!(vector.validate().is_err());
    }

    #[test]
    fn test_from_array_round_trip() {
        let mut values = [0.0f32; FEATURE_COUNT];
        values[3] = 7.0;
        let vector = FeatureVector::from(values);
        assert_eq!(vector.as_array(), &values);
        assert_eq!(vector.as_slice().len(), FEATURE_COUNT);
        assert_eq!(vector.feature_names().len(), FEATURE_COUNT);
    }
}
