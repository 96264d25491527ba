//! Error type for the enumerator.

use thiserror::Error;

/// Errors surfaced by [`crate::enumerate`] and [`crate::EnumeratorConfig::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnumeratorError {
    /// The query normalized to the empty string.
    #[error("query is empty after normalization")]
    InvalidQuery,
    /// A configuration bound was violated.
    #[error("invalid enumerator configuration: {0}")]
    InvalidConfig(String),
}
