//! Search orchestration for the Babel-space retrieval engine.
//!
//! # Overview
//!
//! Binds the generator, enumerator, scorer, and cache crates into a
//! single `search()` operation: enumerate candidate addresses, obtain a
//! page for each (locally generated, remotely fetched, or hybrid),
//! score it against the query, filter by a minimum score, rank, and
//! cache the result under a request fingerprint.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use pipeline::{Pipeline, PipelineConfig, NullRemoteSource, NoopNormalizeHook};
//! use babel_enumerator::EnumeratorConfig;
//! use babel_scorer::ScorerConfig;
//! use babel_cache::{CacheConfig, SystemClock};
//!
//! let pipeline = Pipeline::new(
//!     EnumeratorConfig::default(),
//!     ScorerConfig::default(),
//!     CacheConfig::default(),
//!     PipelineConfig::default(),
//!     Arc::new(SystemClock),
//!     Arc::new(NullRemoteSource),
//!     Arc::new(NoopNormalizeHook),
//! ).unwrap();
//!
//! let response = pipeline.search("hello world", 5, "local", 0.0).unwrap();
//! assert!(response.results.len() <= 5);
//! ```
//!
//! # Module Structure
//!
//! - `config`: [`PipelineConfig`].
//! - `remote`: [`RemotePageSource`] collaborator contract.
//! - `normalize`: [`NormalizeHook`] collaborator contract.
//! - `types`: [`DecodedPage`], [`SearchResponse`], [`PipelineMode`].
//! - `pipeline`: the [`Pipeline`] orchestrator.
//! - `error`: [`PipelineError`].

mod config;
mod error;
mod normalize;
mod pipeline;
mod remote;
mod types;

pub use crate::config::PipelineConfig;
pub use crate::error::PipelineError;
pub use crate::normalize::{NoopNormalizeHook, NormalizeHook};
pub use crate::pipeline::Pipeline;
pub use crate::remote::{NullRemoteSource, RemotePageSource};
pub use crate::types::{DecodedPage, PageSource, PipelineMode, Provenance, SearchResponse};
