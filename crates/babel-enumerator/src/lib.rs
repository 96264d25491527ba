//! Deterministic query-to-candidate-address enumerator for the Babel-space
//! retrieval engine.
//!
//! # Overview
//!
//! This crate turns free-text queries into a ranked, deterministic list of
//! candidate [`Candidate`] addresses. It does **not** claim that an
//! enumerated address's generated page actually contains the query as a
//! literal substring — enumeration is a ranking heuristic over n-gram spans,
//! not an inverse of the page generator.
//!
//! # Pipeline Position
//!
//! ```text
//! Query ──▶ normalize ──▶ n-gram extraction ──▶ per-n-gram address derivation ──▶ merge/sort/truncate
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use enumerator::{enumerate, EnumeratorConfig};
//!
//! let config = EnumeratorConfig::default();
//! let candidates = enumerate("hello world", 5, 2, &config).unwrap();
//! assert!(!candidates.is_empty());
//! assert!(candidates.len() <= 5);
//! ```
//!
//! # Module Structure
//!
//! - `config`: [`EnumeratorConfig`] and depth validation.
//! - `normalize`: query normalization (`normalize_query`).
//! - `ngram`: deterministic n-gram span extraction (`extract_ngrams`).
//! - `candidate`: the [`Candidate`] output type.
//! - `enumerate`: the main `enumerate()` entry point.
//! - `error`: [`EnumeratorError`].

mod candidate;
mod config;
mod enumerate;
mod error;
mod ngram;
mod normalize;

pub use crate::candidate::Candidate;
pub use crate::config::EnumeratorConfig;
pub use crate::enumerate::enumerate;
pub use crate::error::EnumeratorError;
pub use crate::ngram::extract_ngrams;
pub use crate::normalize::normalize_query;
