//! The [`Candidate`] type produced by enumeration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A scored candidate address derived from one or more query n-grams.
///
/// `depth` distinguishes deterministic variants derived from the same
/// n-gram: variant 1, 2, and so on. When candidates from different n-grams
/// collide on the same derived address, their n-gram sets are unioned and
/// scores summed, keeping the smallest originating `depth`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    /// Hex-encoded address derived from the originating n-gram(s).
    pub address: String,
    /// Ranking score; higher ranks first.
    pub score: f64,
    /// The n-gram(s) that produced this candidate.
    pub ngrams: BTreeSet<String>,
    /// Smallest variant depth that produced this candidate.
    pub depth: u32,
}
