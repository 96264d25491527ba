//! Multi-metric coherence scorer for the Babel-space retrieval engine.
//!
//! # Overview
//!
//! Computes a structured [`CoherenceScore`] for a page of text, optionally
//! conditioned on a query, by combining four independent sub-metrics:
//! language-likeness, punctuation/sentence structure, bigram-frequency
//! coherence, and query substring coverage.
//!
//! # Quick Start
//!
//! ```rust
//! use scorer::{score, ScorerConfig};
//!
//! let config = ScorerConfig::default();
//! let result = score("The quick brown fox jumps over the lazy dog.", Some("fox"), &config);
//! assert!(result.overall_score >= 0.0 && result.overall_score <= 100.0);
//! ```
//!
//! # Module Structure
//!
//! - `config`: [`ScorerConfig`] weights and normalization.
//! - `types`: [`CoherenceScore`] and [`ConfidenceLevel`].
//! - `language`: common-word token density sub-metric.
//! - `structure`: punctuation/cadence sub-metric.
//! - `ngram_score`: bigram-entropy sub-metric.
//! - `exact_match`: query substring coverage sub-metric.
//! - `scorer`: the top-level `score()` entry point.

mod config;
mod exact_match;
mod language;
mod ngram_score;
mod scorer;
mod structure;
mod types;

pub use crate::config::ScorerConfig;
pub use crate::scorer::score;
pub use crate::types::{CoherenceScore, ConfidenceLevel};
