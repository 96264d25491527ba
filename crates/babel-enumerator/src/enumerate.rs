//! Query-to-candidate enumeration.

use std::collections::BTreeSet;
use std::collections::HashMap;

use sha2::{Digest, Sha256};

use crate::candidate::Candidate;
use crate::config::{validate_depth, EnumeratorConfig};
use crate::error::EnumeratorError;
use crate::ngram::extract_ngrams;
use crate::normalize::normalize_query;

/// Enumerates candidate addresses for `query`.
///
/// Deterministic: the same `query`, `max_results`, `depth`, and `config`
/// always produce the identical candidate list in the identical order.
///
/// `max_results = 0` returns an empty list without touching n-gram
/// extraction or config validation beyond `depth`, matching the pipeline's
/// "zero requested results is a legitimate empty answer" boundary case.
pub fn enumerate(
    query: &str,
    max_results: usize,
    depth: u32,
    config: &EnumeratorConfig,
) -> Result<Vec<Candidate>, EnumeratorError> {
    validate_depth(depth)?;
    config.validate()?;

    if max_results == 0 {
        return Ok(Vec::new());
    }

    let normalized = normalize_query(query);
    if normalized.is_empty() {
        return Err(EnumeratorError::InvalidQuery);
    }

    let ngrams = extract_ngrams(&normalized, config.min_ngram, config.max_ngram);

    let mut merged: HashMap<String, Candidate> = HashMap::new();
    for ngram in &ngrams {
        for variant in 1..=depth {
            let address = derive_address(ngram, variant);
            let score = ngram.chars().count() as f64 + 1.0 / (variant as f64 + 1.0);

            merged
                .entry(address.clone())
                .and_modify(|existing| {
                    existing.ngrams.insert(ngram.clone());
                    existing.score += score;
                    existing.depth = existing.depth.min(variant);
                })
                .or_insert_with(|| Candidate {
                    address,
                    score,
                    ngrams: BTreeSet::from([ngram.clone()]),
                    depth: variant,
                });
        }
    }

    let mut candidates: Vec<Candidate> = merged.into_values().collect();
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.address.cmp(&b.address))
    });
    candidates.truncate(max_results);

    tracing::trace!(
        ngram_count = ngrams.len(),
        candidate_count = candidates.len(),
        depth,
        "enumerated candidates"
    );

    Ok(candidates)
}

fn derive_address(ngram: &str, variant: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(ngram.as_bytes());
    hasher.update(b":");
    hasher.update(variant.to_string().as_bytes());
    hex::encode(hasher.finalize())
}
