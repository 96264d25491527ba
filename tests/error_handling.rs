use std::sync::Arc;

use babel::{
    CacheConfig, EnumeratorConfig, NoopNormalizeHook, NullRemoteSource, Pipeline, PipelineConfig,
    PipelineError, ScorerConfig, SystemClock,
};

fn new_pipeline() -> Pipeline {
    Pipeline::new(
        EnumeratorConfig::default(),
        ScorerConfig::default(),
        CacheConfig::default(),
        PipelineConfig::default(),
        Arc::new(SystemClock),
        Arc::new(NullRemoteSource),
        Arc::new(NoopNormalizeHook),
    )
    .unwrap()
}

#[test]
fn empty_query_yields_invalid_query_error() {
    let pipeline = new_pipeline();
    let err = pipeline.search("", 5, "local", 0.0).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidQuery(_)));
}

#[test]
fn whitespace_only_query_yields_invalid_query_error() {
    let pipeline = new_pipeline();
    let err = pipeline.search("     ", 5, "local", 0.0).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidQuery(_)));
}

#[test]
fn unknown_mode_yields_invalid_mode_error() {
    let pipeline = new_pipeline();
    let err = pipeline.search("valid query", 5, "quantum", 0.0).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidMode(_)));
}

#[test]
fn pipeline_construction_rejects_invalid_overfetch_factor() {
    let result = Pipeline::new(
        EnumeratorConfig::default(),
        ScorerConfig::default(),
        CacheConfig::default(),
        PipelineConfig {
            overfetch_factor: 50.0,
            ..PipelineConfig::default()
        },
        Arc::new(SystemClock),
        Arc::new(NullRemoteSource),
        Arc::new(NoopNormalizeHook),
    );
    assert!(result.is_err());
}

#[test]
fn pipeline_construction_rejects_invalid_enumerator_config() {
    let result = Pipeline::new(
        babel::EnumeratorConfig {
            min_ngram: 10,
            max_ngram: 2,
        },
        ScorerConfig::default(),
        CacheConfig::default(),
        PipelineConfig::default(),
        Arc::new(SystemClock),
        Arc::new(NullRemoteSource),
        Arc::new(NoopNormalizeHook),
    );
    assert!(result.is_err());
}

#[test]
fn remote_mode_with_no_source_configured_yields_empty_not_an_error() {
    let pipeline = new_pipeline();
    let response = pipeline.search("valid query", 5, "remote", 0.0).unwrap();
    assert!(response.results.is_empty());
}

#[test]
fn max_results_zero_is_not_an_error() {
    let pipeline = new_pipeline();
    let response = pipeline.search("valid query", 0, "local", 0.0).unwrap();
    assert!(response.results.is_empty());
    assert_eq!(response.total_found, 0);
}
