//! Orchestrates enumerate → generate/fetch → score → rank into a single
//! search operation, with caching and a bounded worker pool.

use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use babel_cache::{Cache, CacheEntry, CacheConfig, Clock, Fingerprint};
use babel_enumerator::{enumerate, normalize_query, Candidate, EnumeratorConfig};
use babel_generator::address_to_page;
use babel_scorer::{score as score_page, ScorerConfig};

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::normalize::NormalizeHook;
use crate::remote::RemotePageSource;
use crate::types::{DecodedPage, PageSource, PipelineMode, Provenance, SearchResponse};

/// Binds the generator, enumerator, scorer, and cache into a single
/// `search()` operation.
///
/// The pipeline is the only component permitted to hold mutable
/// process-wide state — and even that state (the cache) is instance-owned,
/// never a global singleton.
pub struct Pipeline {
    enumerator_config: EnumeratorConfig,
    scorer_config: ScorerConfig,
    pipeline_config: PipelineConfig,
    cache: Cache<Vec<DecodedPage>>,
    clock: Arc<dyn Clock>,
    remote: Arc<dyn RemotePageSource>,
    normalize_hook: Arc<dyn NormalizeHook>,
    pool: rayon::ThreadPool,
}

impl Pipeline {
    pub fn new(
        enumerator_config: EnumeratorConfig,
        scorer_config: ScorerConfig,
        cache_config: CacheConfig,
        pipeline_config: PipelineConfig,
        clock: Arc<dyn Clock>,
        remote: Arc<dyn RemotePageSource>,
        normalize_hook: Arc<dyn NormalizeHook>,
    ) -> Result<Pipeline, PipelineError> {
        pipeline_config.validate()?;
        enumerator_config
            .validate()
            .map_err(PipelineError::InvalidQuery)?;

        let cache = Cache::new(cache_config, clock.clone())?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(pipeline_config.worker_threads)
            .build()
            .map_err(|e| PipelineError::InvalidConfig(e.to_string()))?;

        Ok(Pipeline {
            enumerator_config,
            scorer_config,
            pipeline_config,
            cache,
            clock,
            remote,
            normalize_hook,
            pool,
        })
    }

    /// Runs a full search: enumerate candidates, materialize pages,
    /// score, filter, rank, and cache the result.
    ///
    /// `mode` is one of `"local"`, `"remote"`, `"hybrid"` (case
    /// insensitive). `min_score` must lie in `[0, 100]`.
    pub fn search(
        &self,
        query: &str,
        max_results: usize,
        mode: &str,
        min_score: f64,
    ) -> Result<SearchResponse, PipelineError> {
        let mode = PipelineMode::from_str(mode).map_err(PipelineError::InvalidMode)?;
        self.search_typed(query, max_results, mode, min_score)
    }

    /// The same operation as [`Pipeline::search`] but with an already
    /// validated [`PipelineMode`], for callers that don't go through a
    /// string boundary.
    pub fn search_typed(
        &self,
        query: &str,
        max_results: usize,
        mode: PipelineMode,
        min_score: f64,
    ) -> Result<SearchResponse, PipelineError> {
        let start = Instant::now();
        let normalized_query = normalize_query(query);

        let fingerprint = Fingerprint::of(&(
            normalized_query.clone(),
            max_results,
            mode,
            min_score.to_bits(),
            self.pipeline_config.config_version.clone(),
        ));

        if let Some(entry) = self.cache.get(fingerprint) {
            debug!(%fingerprint, "cache hit");
            return Ok(SearchResponse {
                query: query.to_string(),
                total_found: entry.results.len(),
                results: entry.results,
                elapsed_ms: start.elapsed().as_millis() as u64,
            });
        }

        if max_results == 0 {
            let response = SearchResponse {
                query: query.to_string(),
                results: Vec::new(),
                total_found: 0,
                elapsed_ms: start.elapsed().as_millis() as u64,
            };
            self.store(fingerprint, &response);
            return Ok(response);
        }

        let overfetch = self.pipeline_config.overfetch(max_results);
        let candidates = enumerate(
            query,
            overfetch,
            self.pipeline_config.enumerate_depth,
            &self.enumerator_config,
        )?;

        let deadline = self
            .pipeline_config
            .deadline_ms
            .map(|ms| start + Duration::from_millis(ms));

        let query_for_scoring = if normalized_query.is_empty() {
            None
        } else {
            Some(normalized_query.as_str())
        };

        let mut decoded: Vec<DecodedPage> = self.pool.install(|| {
            use rayon::prelude::*;
            candidates
                .par_iter()
                .filter_map(|candidate| {
                    if let Some(deadline) = deadline {
                        if Instant::now() >= deadline {
                            return None;
                        }
                    }
                    self.decode_candidate(candidate, mode, query_for_scoring)
                })
                .collect()
        });

        decoded.retain(|page| page.coherence.overall_score >= min_score);

        decoded.sort_by(|a, b| {
            b.coherence
                .overall_score
                .partial_cmp(&a.coherence.overall_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.address.cmp(&b.address))
        });

        let total_found = decoded.len();
        decoded.truncate(max_results);

        let response = SearchResponse {
            query: query.to_string(),
            results: decoded,
            total_found,
            elapsed_ms: start.elapsed().as_millis() as u64,
        };

        self.store(fingerprint, &response);
        Ok(response)
    }

    fn decode_candidate(
        &self,
        candidate: &Candidate,
        mode: PipelineMode,
        query: Option<&str>,
    ) -> Option<DecodedPage> {
        let (raw_text, source) = match mode {
            PipelineMode::Local => (address_to_page(candidate.address.as_bytes()), PageSource::Local),
            PipelineMode::Remote => match self.remote.fetch_page(&candidate.address) {
                Ok(text) => (text, PageSource::Remote),
                Err(err) => {
                    warn!(address = %candidate.address, error = %err, "remote fetch failed, skipping candidate");
                    return None;
                }
            },
            PipelineMode::Hybrid => match self.remote.fetch_page(&candidate.address) {
                Ok(text) => (text, PageSource::Remote),
                Err(err) => {
                    debug!(address = %candidate.address, error = %err, "remote fetch failed, falling back to generator");
                    (address_to_page(candidate.address.as_bytes()), PageSource::Local)
                }
            },
        };

        Some(self.finish_decode(candidate.address.clone(), raw_text, source, query))
    }

    /// Scores and wraps an already-known `(address, text)` pair into a
    /// `DecodedPage`, for callers that hold page text obtained outside
    /// `search` (e.g. fetched directly from an external page source) and
    /// just need it scored and stamped with provenance.
    ///
    /// `text` is not re-derived from `address` via the local generator, so
    /// the resulting page is tagged `PageSource::Remote`.
    pub fn decode(&self, address: &str, text: &str, query: Option<&str>) -> DecodedPage {
        let normalized_query = query.map(normalize_query);
        let query_for_scoring = normalized_query.as_deref().filter(|q| !q.is_empty());
        self.finish_decode(
            address.to_string(),
            text.to_string(),
            PageSource::Remote,
            query_for_scoring,
        )
    }

    fn finish_decode(
        &self,
        address: String,
        raw_text: String,
        source: PageSource,
        query: Option<&str>,
    ) -> DecodedPage {
        let coherence = score_page(&raw_text, query, &self.scorer_config);
        let normalized_text = self.normalize_hook.normalize(&raw_text, query);
        let normalized = normalized_text.is_some();

        DecodedPage {
            address,
            raw_text,
            query: query.map(|q| q.to_string()),
            source,
            coherence,
            normalized_text,
            provenance: Provenance {
                timestamp: self.clock.now_secs(),
                normalized,
                source,
            },
        }
    }

    fn store(&self, fingerprint: Fingerprint, response: &SearchResponse) {
        let entry = CacheEntry::new(fingerprint, response.results.clone(), self.clock.now_secs());
        self.cache.put(entry);
    }

    /// Removes all cached results.
    pub fn flush_cache(&self) {
        self.cache.flush();
    }

    /// Removes the cache entry for a specific fingerprint.
    pub fn invalidate_cache(&self, fingerprint: Fingerprint) {
        self.cache.invalidate(fingerprint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::NoopNormalizeHook;
    use crate::remote::NullRemoteSource;
    use babel_cache::SystemClock;

    fn test_pipeline() -> Pipeline {
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
    fn local_search_returns_ranked_results() {
        let pipeline = test_pipeline();
        let response = pipeline.search("hello world", 5, "local", 0.0).unwrap();
        assert!(!response.results.is_empty());
        assert!(response.results.len() <= 5);
        for page in &response.results {
            assert_eq!(page.source, PageSource::Local);
        }
    }

    #[test]
    fn results_are_sorted_by_overall_score_descending() {
        let pipeline = test_pipeline();
        let response = pipeline.search("hello world", 10, "local", 0.0).unwrap();
        for window in response.results.windows(2) {
            let (a, b) = (&window[0], &window[1]);
            assert!(
                a.coherence.overall_score > b.coherence.overall_score
                    || (a.coherence.overall_score == b.coherence.overall_score
                        && a.address <= b.address)
            );
        }
    }

    #[test]
    fn min_score_filters_low_scoring_pages() {
        let pipeline = test_pipeline();
        let response = pipeline.search("hello world", 10, "local", 999.0).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn empty_query_propagates_invalid_query() {
        let pipeline = test_pipeline();
        let err = pipeline.search("", 5, "local", 0.0).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidQuery(_)));
    }

    #[test]
    fn unrecognized_mode_is_rejected() {
        let pipeline = test_pipeline();
        let err = pipeline.search("hello world", 5, "bogus", 0.0).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidMode(_)));
    }

    #[test]
    fn max_results_zero_returns_empty_without_error() {
        let pipeline = test_pipeline();
        let response = pipeline.search("hello world", 0, "local", 0.0).unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.total_found, 0);
    }

    #[test]
    fn repeated_search_hits_cache_and_matches_first_response() {
        let pipeline = test_pipeline();
        let first = pipeline.search("hello world", 5, "local", 0.0).unwrap();
        let second = pipeline.search("hello world", 5, "local", 0.0).unwrap();
        assert_eq!(first.results, second.results);
    }

    #[test]
    fn remote_mode_without_a_real_source_yields_empty_results() {
        let pipeline = test_pipeline();
        let response = pipeline.search("hello world", 5, "remote", 0.0).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn hybrid_mode_falls_back_to_local_without_a_real_source() {
        let pipeline = test_pipeline();
        let response = pipeline.search("hello world", 5, "hybrid", 0.0).unwrap();
        assert!(!response.results.is_empty());
        for page in &response.results {
            assert_eq!(page.source, PageSource::Local);
        }
    }

    #[test]
    fn deterministic_across_repeated_calls_with_fresh_pipelines() {
        let first = test_pipeline().search("hello world", 5, "local", 0.0).unwrap();
        let second = test_pipeline().search("hello world", 5, "local", 0.0).unwrap();
        assert_eq!(first.results, second.results);
    }

    #[test]
    fn decode_wraps_supplied_text_without_regenerating_it() {
        let pipeline = test_pipeline();
        let page = pipeline.decode("some-address", "The quick brown fox jumps over the lazy dog.", Some("fox"));
        assert_eq!(page.address, "some-address");
        assert_eq!(page.raw_text, "The quick brown fox jumps over the lazy dog.");
        assert_eq!(page.source, PageSource::Remote);
        assert_eq!(page.provenance.source, PageSource::Remote);
        assert!(page.coherence.overall_score > 0.0);
    }

    #[test]
    fn decode_with_no_query_still_scores_the_page() {
        let pipeline = test_pipeline();
        let page = pipeline.decode("addr", "Some ordinary sentence here.", None);
        assert!(page.query.is_none());
        assert!(page.coherence.overall_score >= 0.0);
    }

    #[test]
    fn decode_is_deterministic_for_the_same_input() {
        let pipeline = test_pipeline();
        let first = pipeline.decode("addr", "Repeatable text for scoring.", Some("text"));
        let second = pipeline.decode("addr", "Repeatable text for scoring.", Some("text"));
        assert_eq!(first.coherence, second.coherence);
    }
}
