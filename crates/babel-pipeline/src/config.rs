//! Pipeline-level configuration: overfetch, concurrency, deadline.

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Tunables for a [`crate::Pipeline`], independent of the enumerator,
/// scorer, and cache configs it's constructed with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineConfig {
    /// Overfetch multiplier: the enumerator is asked for
    /// `ceil(max_results * overfetch_factor)` candidates so that
    /// min-score filtering doesn't under-return. Bounded `[1.0, 10.0]`.
    #[serde(default = "PipelineConfig::default_overfetch_factor")]
    pub overfetch_factor: f64,

    /// Number of worker threads in the bounded pool used to generate and
    /// score candidates in parallel. Bounded `[1, 64]`.
    #[serde(default = "PipelineConfig::default_worker_threads")]
    pub worker_threads: usize,

    /// Soft deadline for a single `search()` call, in milliseconds. Once
    /// elapsed, remaining unscored candidates are skipped rather than
    /// processed; already-scored results are still ranked and returned.
    #[serde(default)]
    pub deadline_ms: Option<u64>,

    /// Version tag folded into the cache fingerprint; bump to invalidate
    /// all previously cached entries after a config change.
    #[serde(default = "PipelineConfig::default_config_version")]
    pub config_version: String,

    /// Default `depth` passed to the enumerator when a caller doesn't
    /// specify one explicitly.
    #[serde(default = "PipelineConfig::default_enumerate_depth")]
    pub enumerate_depth: u32,
}

impl PipelineConfig {
    pub fn default_overfetch_factor() -> f64 {
        3.0
    }

    pub fn default_worker_threads() -> usize {
        4
    }

    pub fn default_config_version() -> String {
        "v1".to_string()
    }

    pub fn default_enumerate_depth() -> u32 {
        2
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if !(1.0..=10.0).contains(&self.overfetch_factor) {
            return Err(PipelineError::InvalidConfig(
                "overfetch_factor must be in [1.0, 10.0]".to_string(),
            ));
        }
        if !(1..=64).contains(&self.worker_threads) {
            return Err(PipelineError::InvalidConfig(
                "worker_threads must be in [1, 64]".to_string(),
            ));
        }
        if self.config_version.trim().is_empty() {
            return Err(PipelineError::InvalidConfig(
                "config_version must not be empty".to_string(),
            ));
        }
        if self.enumerate_depth == 0 {
            return Err(PipelineError::InvalidConfig(
                "enumerate_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// `ceil(max_results * overfetch_factor)`, at least `max_results`.
    pub fn overfetch(&self, max_results: usize) -> usize {
        let raw = (max_results as f64) * self.overfetch_factor;
        raw.ceil().max(max_results as f64) as usize
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            overfetch_factor: Self::default_overfetch_factor(),
            worker_threads: Self::default_worker_threads(),
            deadline_ms: None,
            config_version: Self::default_config_version(),
            enumerate_depth: Self::default_enumerate_depth(),
        }
    }
}
