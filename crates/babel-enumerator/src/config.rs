//! Configuration for the enumerator.
//!
//! `EnumeratorConfig` controls n-gram span bounds. `depth` and `max_results`
//! are threaded as explicit call arguments to [`crate::enumerate`] per the
//! public contract, but are validated here too so callers building a config
//! bundle up front can fail fast.

use serde::{Deserialize, Serialize};

use crate::error::EnumeratorError;

/// Bounds for n-gram span extraction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnumeratorConfig {
    /// Minimum n-gram length, inclusive.
    #[serde(default = "EnumeratorConfig::default_min_ngram")]
    pub min_ngram: usize,
    /// Maximum n-gram length, inclusive.
    #[serde(default = "EnumeratorConfig::default_max_ngram")]
    pub max_ngram: usize,
}

impl EnumeratorConfig {
    pub fn default_min_ngram() -> usize {
        2
    }

    pub fn default_max_ngram() -> usize {
        5
    }

    /// Validate `1 <= min_ngram <= max_ngram <= 16`.
    pub fn validate(&self) -> Result<(), EnumeratorError> {
        if self.min_ngram < 1 {
            return Err(EnumeratorError::InvalidConfig(
                "min_ngram must be >= 1".into(),
            ));
        }
        if self.min_ngram > self.max_ngram {
            return Err(EnumeratorError::InvalidConfig(
                "min_ngram must be <= max_ngram".into(),
            ));
        }
        if self.max_ngram > 16 {
            return Err(EnumeratorError::InvalidConfig(
                "max_ngram must be <= 16".into(),
            ));
        }
        Ok(())
    }
}

impl Default for EnumeratorConfig {
    fn default() -> Self {
        Self {
            min_ngram: Self::default_min_ngram(),
            max_ngram: Self::default_max_ngram(),
        }
    }
}

/// Validate `depth >= 1`.
pub fn validate_depth(depth: u32) -> Result<(), EnumeratorError> {
    if depth < 1 {
        return Err(EnumeratorError::InvalidConfig("depth must be >= 1".into()));
    }
    Ok(())
}
