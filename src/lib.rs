//! Coherence-driven retrieval engine over a deterministic Babel-space text
//! corpus.
//!
//! # Overview
//!
//! `babel` re-exports the generator, enumerator, scorer, cache, and
//! pipeline crates so applications can drive a full search through a
//! single dependency, plus a YAML-backed [`EngineConfig`] loader for
//! assembling all four stage configs from one file.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use babel::{Pipeline, PipelineConfig, NullRemoteSource, NoopNormalizeHook};
//! use babel::{EnumeratorConfig, ScorerConfig, CacheConfig, SystemClock};
//!
//! # fn demo() -> Result<(), babel::PipelineError> {
//! let pipeline = Pipeline::new(
//!     EnumeratorConfig::default(),
//!     ScorerConfig::default(),
//!     CacheConfig::default(),
//!     PipelineConfig::default(),
//!     Arc::new(SystemClock),
//!     Arc::new(NullRemoteSource),
//!     Arc::new(NoopNormalizeHook),
//! )?;
//!
//! let response = pipeline.search("hello world", 5, "local", 0.0)?;
//! assert!(response.results.len() <= 5);
//! # Ok(())
//! # }
//! ```
//!
//! For assembling configuration from a YAML file instead of building each
//! stage config by hand, see [`EngineConfig::from_file`].
//!
//! ## Convenience entry points
//!
//! Beyond `Pipeline::search`, three lower-level operations are exposed for
//! callers that want a single stage rather than a full search:
//! [`address_to_page`] (generate a page from an address),
//! [`enumerate`] (rank candidate addresses for a query), and
//! [`Pipeline::decode`] (score and wrap an already-known `(address, text)`
//! pair into a [`DecodedPage`]).
//!
//! ## Scope
//!
//! This crate covers the deterministic retrieval core only: the page
//! generator, the query enumerator, the coherence scorer, the result
//! cache, and the orchestrating pipeline. The chat/session layer, the
//! browser UI, on-disk persistence, administrative endpoints,
//! authentication, and deployment plumbing are external collaborators
//! and out of scope here.

pub use babel_cache::{Cache, CacheConfig, CacheEntry, CacheError, Clock, Fingerprint, SystemClock, TestClock};
pub use babel_enumerator::{enumerate, extract_ngrams, normalize_query, Candidate, EnumeratorConfig, EnumeratorError};
pub use babel_generator::{address_to_page, random_address, validate_page, PageValidationError, ALPHABET, ALPHABET_SIZE, PAGE_LENGTH};
pub use babel_pipeline::{
    DecodedPage, NoopNormalizeHook, NormalizeHook, NullRemoteSource, PageSource, Pipeline,
    PipelineConfig, PipelineError, PipelineMode, Provenance, RemotePageSource, SearchResponse,
};
pub use babel_scorer::{score, CoherenceScore, ConfidenceLevel, ScorerConfig};

pub mod config;

pub use config::{ConfigLoadError, EngineConfig};
