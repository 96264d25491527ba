//! Scoring weight configuration.

use serde::{Deserialize, Serialize};

/// Weights applied to the four coherence sub-metrics.
///
/// `overall_score = w_lang*language + w_struct*structure + w_ngram*ngram +
/// w_exact*exact`. Weights need not sum to exactly 1.0 as supplied; call
/// [`ScorerConfig::normalized`] to get a copy rescaled so they do.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScorerConfig {
    #[serde(default = "ScorerConfig::default_w_lang")]
    pub w_lang: f64,
    #[serde(default = "ScorerConfig::default_w_struct")]
    pub w_struct: f64,
    #[serde(default = "ScorerConfig::default_w_ngram")]
    pub w_ngram: f64,
    #[serde(default = "ScorerConfig::default_w_exact")]
    pub w_exact: f64,
}

impl ScorerConfig {
    pub fn default_w_lang() -> f64 {
        0.30
    }

    pub fn default_w_struct() -> f64 {
        0.20
    }

    pub fn default_w_ngram() -> f64 {
        0.20
    }

    pub fn default_w_exact() -> f64 {
        0.30
    }

    /// Returns a copy of this config with weights rescaled to sum to 1.0.
    ///
    /// If the supplied weights already sum to (approximately) zero, the
    /// default weights are used instead to avoid dividing by zero.
    pub fn normalized(&self) -> ScorerConfig {
        let sum = self.w_lang + self.w_struct + self.w_ngram + self.w_exact;
        if sum.abs() < 1e-12 {
            return ScorerConfig::default();
        }
        ScorerConfig {
            w_lang: self.w_lang / sum,
            w_struct: self.w_struct / sum,
            w_ngram: self.w_ngram / sum,
            w_exact: self.w_exact / sum,
        }
    }
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            w_lang: Self::default_w_lang(),
            w_struct: Self::default_w_struct(),
            w_ngram: Self::default_w_ngram(),
            w_exact: Self::default_w_exact(),
        }
    }
}
