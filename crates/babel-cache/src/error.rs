//! Cache error type.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("invalid cache config: {0}")]
    InvalidConfig(String),
}
