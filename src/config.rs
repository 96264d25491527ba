//! YAML configuration file support for the Babel-space engine.
//!
//! Loads all stage configurations (enumerator, scorer, cache, pipeline)
//! from a single YAML file.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//!
//! enumerator:
//!   min_ngram: 2
//!   max_ngram: 5
//!
//! scorer:
//!   w_lang: 0.30
//!   w_struct: 0.20
//!   w_ngram: 0.20
//!   w_exact: 0.30
//!
//! cache:
//!   ttl_seconds: 3600
//!   max_entries: 1024
//!
//! pipeline:
//!   overfetch_factor: 3.0
//!   worker_threads: 4
//!   config_version: "v1"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use babel_cache::CacheConfig;
use babel_enumerator::EnumeratorConfig;
use babel_pipeline::PipelineConfig;
use babel_scorer::ScorerConfig;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration structure for the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    /// Configuration format version.
    #[serde(default = "EngineConfig::default_version")]
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub enumerator: EnumeratorConfig,

    #[serde(default)]
    pub scorer: ScorerConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl EngineConfig {
    pub fn default_version() -> String {
        "1.0".to_string()
    }

    /// Loads and validates a YAML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parses and validates YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: EngineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }

        self.enumerator
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        self.cache
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        self.pipeline
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            name: None,
            enumerator: EnumeratorConfig::default(),
            scorer: ScorerConfig::default(),
            cache: CacheConfig::default(),
            pipeline: PipelineConfig::default(),
        }
    }
}
