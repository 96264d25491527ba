//! The value stored behind a cache fingerprint.

use serde::{Deserialize, Serialize};

use crate::fingerprint::Fingerprint;

/// An immutable cached result set, tagged with its insertion time.
///
/// `V` is the pipeline's result payload (a ranked page list); this crate
/// is agnostic to its shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheEntry<V> {
    pub fingerprint: Fingerprint,
    pub results: V,
    pub created_at: u64,
}

impl<V> CacheEntry<V> {
    pub fn new(fingerprint: Fingerprint, results: V, created_at: u64) -> CacheEntry<V> {
        CacheEntry {
            fingerprint,
            results,
            created_at,
        }
    }

    pub fn is_expired(&self, now: u64, ttl_seconds: u64) -> bool {
        now.saturating_sub(self.created_at) >= ttl_seconds
    }
}
