//! Request fingerprinting: a non-cryptographic cache key.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// An opaque cache key derived from a request's shape.
///
/// Backed by `DefaultHasher`, which is not collision-resistant. That is
/// fine here: fingerprints only need to distinguish distinct requests
/// within one process's cache, not resist an adversary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(pub u64);

impl Fingerprint {
    /// Computes a fingerprint over any `Hash`-able request shape.
    pub fn of<T: Hash>(value: &T) -> Fingerprint {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        Fingerprint(hasher.finish())
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
