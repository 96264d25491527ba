//! Output types produced by scoring.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Bucketed confidence derived from `overall_score` by fixed thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Sparse,
    Minimal,
}

impl ConfidenceLevel {
    /// Buckets an overall score in `[0,100]` into a confidence level.
    ///
    /// `≥80 → high`, `[60,80) → medium`, `[40,60) → sparse`, `<40 → minimal`.
    pub fn from_overall(overall: f64) -> ConfidenceLevel {
        if overall >= 80.0 {
            ConfidenceLevel::High
        } else if overall >= 60.0 {
            ConfidenceLevel::Medium
        } else if overall >= 40.0 {
            ConfidenceLevel::Sparse
        } else {
            ConfidenceLevel::Minimal
        }
    }
}

/// A structured, multi-metric coherence score.
///
/// `metrics` carries auxiliary diagnostics (token counts, bigram entropy,
/// and similar) that do not factor into `overall_score` but are useful for
/// debugging and observability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoherenceScore {
    pub language_score: f64,
    pub structure_score: f64,
    pub ngram_score: f64,
    pub exact_match_score: f64,
    pub overall_score: f64,
    pub confidence_level: ConfidenceLevel,
    pub metrics: BTreeMap<String, f64>,
}

impl CoherenceScore {
    /// The all-zero score produced for empty text.
    pub fn zero() -> CoherenceScore {
        CoherenceScore {
            language_score: 0.0,
            structure_score: 0.0,
            ngram_score: 0.0,
            exact_match_score: 0.0,
            overall_score: 0.0,
            confidence_level: ConfidenceLevel::Minimal,
            metrics: BTreeMap::new(),
        }
    }
}
