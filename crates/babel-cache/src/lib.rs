//! TTL + LRU result cache for the Babel-space retrieval engine.
//!
//! # Overview
//!
//! A request-fingerprint keyed cache. Unlike a process-wide singleton, a
//! [`Cache`] is always explicitly constructed and owned by its caller
//! (typically the pipeline), and takes an injectable [`Clock`] so TTL
//! expiry is deterministic in tests.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use cache::{Cache, CacheConfig, CacheEntry, Fingerprint, SystemClock};
//!
//! let cache: Cache<Vec<String>> = Cache::new(CacheConfig::default(), Arc::new(SystemClock)).unwrap();
//! let fp = Fingerprint::of(&"some request shape");
//! cache.put(CacheEntry::new(fp, vec!["result".to_string()], 0));
//! assert!(cache.get(fp).is_some());
//! ```
//!
//! # Module Structure
//!
//! - `config`: [`CacheConfig`] (TTL, capacity).
//! - `clock`: [`Clock`], [`SystemClock`], [`TestClock`].
//! - `fingerprint`: [`Fingerprint`], the cache key.
//! - `entry`: [`CacheEntry`].
//! - `cache`: the [`Cache`] itself.
//! - `error`: [`CacheError`].

mod cache;
mod clock;
mod config;
mod entry;
mod error;
mod fingerprint;

pub use crate::cache::Cache;
pub use crate::clock::{Clock, SystemClock, TestClock};
pub use crate::config::CacheConfig;
pub use crate::entry::CacheEntry;
pub use crate::error::CacheError;
pub use crate::fingerprint::Fingerprint;
