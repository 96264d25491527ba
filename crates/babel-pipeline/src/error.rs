//! Pipeline error type.

use babel_cache::CacheError;
use babel_enumerator::EnumeratorError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] EnumeratorError),

    #[error("invalid search mode: {0}")]
    InvalidMode(String),

    #[error("invalid pipeline config: {0}")]
    InvalidConfig(String),

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("remote page source unavailable: {0}")]
    RemoteUnavailable(String),
}
