//! Address derivation helpers.

use sha2::{Digest, Sha256};

/// Fixed literal used to derive the canonical address when no seed is given.
/// Chosen arbitrarily; the only requirement is that it never changes, so
/// repeated calls to `random_address(None)` stay stable across versions.
const CANONICAL_SEED_LITERAL: &[u8] = b"babel-space:canonical-seed:v1";

/// Returns a deterministic hex address for `seed`.
///
/// When `seed` is `Some`, the same seed always yields the same address.
/// When `seed` is `None`, a fixed canonical seed-derived address is returned
/// (stable across calls and across processes).
pub fn random_address(seed: Option<u64>) -> String {
    let mut hasher = Sha256::new();
    match seed {
        Some(value) => hasher.update(value.to_be_bytes()),
        None => hasher.update(CANONICAL_SEED_LITERAL),
    }
    hex::encode(hasher.finalize())
}
