use std::sync::Arc;

use babel::{
    CacheConfig, EnumeratorConfig, NoopNormalizeHook, NullRemoteSource, Pipeline, PipelineConfig,
    ScorerConfig, SystemClock,
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
    .expect("default pipeline config is always valid")
}

#[test]
fn identical_search_calls_from_fresh_pipelines_agree() {
    let first = new_pipeline()
        .search("hello world", 5, "local", 0.0)
        .expect("search succeeds");
    let second = new_pipeline()
        .search("hello world", 5, "local", 0.0)
        .expect("search succeeds");

    assert_eq!(first.results, second.results);
    assert_eq!(first.total_found, second.total_found);
}

#[test]
fn generator_is_a_pure_function_of_address() {
    let page_a = babel::address_to_page(b"same-address");
    let page_b = babel::address_to_page(b"same-address");
    assert_eq!(page_a, page_b);
    assert_eq!(page_a.chars().count(), babel::PAGE_LENGTH);
}

#[test]
fn enumerator_output_is_order_stable_across_calls() {
    let config = EnumeratorConfig::default();
    let first = babel::enumerate("hello world", 8, 2, &config).unwrap();
    let second = babel::enumerate("hello world", 8, 2, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn cache_hit_short_circuits_recomputation() {
    let pipeline = new_pipeline();
    let first = pipeline.search("deterministic caching", 5, "local", 0.0).unwrap();
    let second = pipeline.search("deterministic caching", 5, "local", 0.0).unwrap();
    assert_eq!(first.results, second.results);
}
