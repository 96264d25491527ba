//! TTL-expiring, LRU-evicting result cache.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::trace;

use crate::clock::Clock;
use crate::config::CacheConfig;
use crate::entry::CacheEntry;
use crate::error::CacheError;
use crate::fingerprint::Fingerprint;

/// A TTL + LRU cache keyed by request [`Fingerprint`].
///
/// Owned by whichever caller needs it — never a process-wide singleton.
/// Takes an injected [`Clock`] so expiry is deterministic under test.
///
/// Recency order is tracked with a simple `Vec<Fingerprint>` (most
/// recently used at the end); at the target scale (hundreds to low
/// thousands of entries) a linear scan on touch is simpler to reason
/// about than an arena-backed linked list and costs nothing observable.
pub struct Cache<V> {
    clock: Arc<dyn Clock>,
    config: CacheConfig,
    inner: Mutex<Inner<V>>,
}

struct Inner<V> {
    entries: HashMap<Fingerprint, CacheEntry<V>>,
    recency: Vec<Fingerprint>,
}

impl<V: Clone> Cache<V> {
    /// Builds a new cache. Returns an error if `config` is invalid.
    pub fn new(config: CacheConfig, clock: Arc<dyn Clock>) -> Result<Cache<V>, CacheError> {
        config.validate()?;
        Ok(Cache {
            clock,
            config,
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                recency: Vec::new(),
            }),
        })
    }

    /// Returns the entry for `fingerprint`, or `None` if absent or
    /// expired. A hit marks the entry most-recently-used.
    pub fn get(&self, fingerprint: Fingerprint) -> Option<CacheEntry<V>> {
        let now = self.clock.now_secs();
        let mut inner = self.inner.lock().expect("cache lock poisoned");

        let expired = match inner.entries.get(&fingerprint) {
            Some(entry) => entry.is_expired(now, self.config.ttl_seconds),
            None => return None,
        };

        if expired {
            trace!(%fingerprint, "cache entry expired");
            inner.entries.remove(&fingerprint);
            inner.recency.retain(|fp| *fp != fingerprint);
            return None;
        }

        inner.touch(fingerprint);
        inner.entries.get(&fingerprint).cloned()
    }

    /// Inserts or overwrites the entry for `fingerprint.fingerprint`.
    ///
    /// If inserting a new key would exceed `max_entries`, the least
    /// recently used entry is evicted first.
    pub fn put(&self, entry: CacheEntry<V>) {
        let fingerprint = entry.fingerprint;
        let mut inner = self.inner.lock().expect("cache lock poisoned");

        let is_new_key = !inner.entries.contains_key(&fingerprint);
        if is_new_key && inner.entries.len() >= self.config.max_entries {
            if let Some(victim) = inner.recency.first().copied() {
                trace!(fingerprint = %victim, "evicting least-recently-used cache entry");
                inner.entries.remove(&victim);
                inner.recency.remove(0);
            }
        }

        inner.entries.insert(fingerprint, entry);
        inner.touch(fingerprint);
    }

    /// Removes all entries.
    pub fn flush(&self) {
        let mut inner = self.inner.lock().expect("cache lock poisoned");
        inner.entries.clear();
        inner.recency.clear();
    }

    /// Removes one entry, if present.
    pub fn invalidate(&self, fingerprint: Fingerprint) {
        let mut inner = self.inner.lock().expect("cache lock poisoned");
        inner.entries.remove(&fingerprint);
        inner.recency.retain(|fp| *fp != fingerprint);
    }

    /// The current number of live (not necessarily unexpired) entries.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("cache lock poisoned").entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V> Inner<V> {
    fn touch(&mut self, fingerprint: Fingerprint) {
        self.recency.retain(|fp| *fp != fingerprint);
        self.recency.push(fingerprint);
    }
}
