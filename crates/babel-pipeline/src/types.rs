//! Request/response types for a search.

use serde::{Deserialize, Serialize};

use babel_scorer::CoherenceScore;

/// How the pipeline should obtain a page behind a candidate address.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PipelineMode {
    /// Always materialize via the local generator.
    Local,
    /// Always fetch from the external page source; per-candidate failures
    /// are logged and the candidate is skipped.
    Remote,
    /// Try the external page source first, falling back to the local
    /// generator on failure.
    Hybrid,
}

impl std::str::FromStr for PipelineMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(PipelineMode::Local),
            "remote" => Ok(PipelineMode::Remote),
            "hybrid" => Ok(PipelineMode::Hybrid),
            other => Err(format!("unrecognized mode: {other}")),
        }
    }
}

/// Which concrete source produced a given page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PageSource {
    Local,
    Remote,
}

/// Provenance metadata attached to every decoded page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Provenance {
    /// Unix timestamp (seconds) the decode was performed.
    pub timestamp: u64,
    /// Whether the optional normalization hook ran and produced output.
    pub normalized: bool,
    pub source: PageSource,
}

/// A fully decoded, scored page ready for ranking and return to a caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecodedPage {
    pub address: String,
    pub raw_text: String,
    pub query: Option<String>,
    pub source: PageSource,
    pub coherence: CoherenceScore,
    pub normalized_text: Option<String>,
    pub provenance: Provenance,
}

/// The outcome of a single `search()` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<DecodedPage>,
    pub total_found: usize,
    pub elapsed_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn pipeline_mode_parses_case_insensitively() {
        assert_eq!(PipelineMode::from_str("Local").unwrap(), PipelineMode::Local);
        assert_eq!(PipelineMode::from_str("REMOTE").unwrap(), PipelineMode::Remote);
        assert_eq!(PipelineMode::from_str("hybrid").unwrap(), PipelineMode::Hybrid);
    }

    #[test]
    fn pipeline_mode_rejects_unknown_values() {
        assert!(PipelineMode::from_str("bogus").is_err());
    }
}
