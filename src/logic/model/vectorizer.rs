//! TF-IDF Vectorizer - Transform Only
//!
//! Re-applies the text vectorization the classifier was trained with.
//! Vocabulary and idf weights ship in the model manifest; nothing is
//! learned at runtime.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Word tokenization: runs of 2+ word characters, the trainer's default
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\w\w+\b").expect("word token pattern")
});

fn default_ngram() -> usize {
    1
}

// ============================================================================
// CONFIG
// ============================================================================

/// Tokenization mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Analyzer {
    /// Word tokens, n-grams joined with a single space
    Word,
    /// Character n-grams over the raw text
    Char,
}

/// Serialized vectorizer state from the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerConfig {
    pub analyzer: Analyzer,
    #[serde(default = "default_ngram")]
    pub ngram_min: usize,
    #[serde(default = "default_ngram")]
    pub ngram_max: usize,
    /// Token → column index
    pub vocabulary: HashMap<String, usize>,
    /// Per-column idf weight, indexed by column
    pub idf: Vec<f32>,
}

/// Rejected vectorizer state
#[derive(Debug, Error)]
pub enum VectorizerError {
    #[error("vocabulary has {vocabulary} entries but idf has {idf}")]
    DimensionMismatch { vocabulary: usize, idf: usize },
    #[error("token '{token}' maps to column {index}, past dimension {dimension}")]
    IndexOutOfRange {
        token: String,
        index: usize,
        dimension: usize,
    },
    #[error("invalid ngram range {min}..={max}")]
    BadNgramRange { min: usize, max: usize },
}

// ============================================================================
// VECTORIZER
// ============================================================================

/// Validated, ready-to-transform TF-IDF state
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    config: VectorizerConfig,
}

impl TfidfVectorizer {
    /// Validate manifest state. Every vocabulary index must land inside
    /// the idf table, and the ngram range must be well-formed.
    pub fn new(config: VectorizerConfig) -> Result<Self, VectorizerError> {
        if config.vocabulary.len() != config.idf.len() {
            return Err(VectorizerError::DimensionMismatch {
                vocabulary: config.vocabulary.len(),
                idf: config.idf.len(),
            });
        }

        if config.ngram_min == 0 || config.ngram_min > config.ngram_max {
            return Err(VectorizerError::BadNgramRange {
                min: config.ngram_min,
                max: config.ngram_max,
            });
        }

        let dimension = config.idf.len();
        for (token, &index) in &config.vocabulary {
            if index >= dimension {
                return Err(VectorizerError::IndexOutOfRange {
                    token: token.clone(),
                    index,
                    dimension,
                });
            }
        }

        Ok(Self { config })
    }

    /// Width of the text feature block
    pub fn dimension(&self) -> usize {
        self.config.idf.len()
    }

    /// Raw counts → tf-idf → L2 normalization, exactly the trained
    /// transform. Unknown tokens drop out; a text with no known tokens
    /// produces an all-zero row.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut row = vec![0.0f32; self.dimension()];

        for token in self.tokens(text) {
            if let Some(&index) = self.config.vocabulary.get(token.as_str()) {
                row[index] += 1.0;
            }
        }

        for (index, value) in row.iter_mut().enumerate() {
            if *value > 0.0 {
                *value *= self.config.idf[index];
            }
        }

        let norm = row.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut row {
                *value /= norm;
            }
        }

        row
    }

    fn tokens(&self, text: &str) -> Vec<String> {
        let (min, max) = (self.config.ngram_min, self.config.ngram_max);

        match self.config.analyzer {
            Analyzer::Word => {
                let words: Vec<&str> = TOKEN_PATTERN
                    .find_iter(text)
                    .map(|m| m.as_str())
                    .collect();

                let mut out = Vec::new();
                for n in min..=max {
                    if words.len() < n {
                        break;
                    }
                    for window in words.windows(n) {
                        out.push(window.join(" "));
                    }
                }
                out
            }
            Analyzer::Char => {
                let chars: Vec<char> = text.chars().collect();

                let mut out = Vec::new();
                for n in min..=max {
                    if chars.len() < n {
                        break;
                    }
                    for window in chars.windows(n) {
                        out.push(window.iter().collect());
                    }
                }
                out
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
