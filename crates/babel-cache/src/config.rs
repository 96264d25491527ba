//! Cache sizing and expiry configuration.

use serde::{Deserialize, Serialize};

use crate::error::CacheError;

/// TTL and capacity configuration for a [`crate::Cache`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheConfig {
    #[serde(default = "CacheConfig::default_ttl_seconds")]
    pub ttl_seconds: u64,
    #[serde(default = "CacheConfig::default_max_entries")]
    pub max_entries: usize,
}

impl CacheConfig {
    pub fn default_ttl_seconds() -> u64 {
        3600
    }

    pub fn default_max_entries() -> usize {
        1024
    }

    pub fn validate(&self) -> Result<(), CacheError> {
        if self.max_entries == 0 {
            return Err(CacheError::InvalidConfig(
                "max_entries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: Self::default_ttl_seconds(),
            max_entries: Self::default_max_entries(),
        }
    }
}
