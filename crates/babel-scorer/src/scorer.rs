//! Top-level coherence scoring entry point.

use crate::config::ScorerConfig;
use crate::exact_match::exact_match_score;
use crate::language::language_score;
use crate::ngram_score::ngram_score;
use crate::structure::structure_score;
use crate::types::{CoherenceScore, ConfidenceLevel};

/// Computes a structured [`CoherenceScore`] for `text`, optionally
/// conditioned on `query`.
///
/// Total function: never fails for any finite `text` and any `query`.
/// Empty `text` returns [`CoherenceScore::zero`].
pub fn score(text: &str, query: Option<&str>, config: &ScorerConfig) -> CoherenceScore {
    if text.is_empty() {
        return CoherenceScore::zero();
    }

    let config = config.normalized();

    let language = language_score(text);
    let structure = structure_score(text);
    let ngram = ngram_score(text);
    let exact = exact_match_score(text, query);

    let overall = config.w_lang * language
        + config.w_struct * structure
        + config.w_ngram * ngram.score
        + config.w_exact * exact;

    let mut metrics = std::collections::BTreeMap::new();
    metrics.insert("bigram_entropy".to_string(), ngram.entropy);
    metrics.insert("distinct_bigrams".to_string(), ngram.distinct_bigrams as f64);
    metrics.insert("total_bigrams".to_string(), ngram.total_bigrams as f64);
    metrics.insert(
        "common_word_tokens".to_string(),
        (language / 100.0 * text.split_whitespace().count() as f64).round(),
    );

    CoherenceScore {
        language_score: language,
        structure_score: structure,
        ngram_score: ngram.score,
        exact_match_score: exact,
        overall_score: overall,
        confidence_level: ConfidenceLevel::from_overall(overall),
        metrics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_zero_score() {
        let result = score("", None, &ScorerConfig::default());
        assert_eq!(result, CoherenceScore::zero());
    }

    #[test]
    fn all_sub_scores_are_bounded() {
        let result = score("The quick brown fox jumps over the lazy dog.", Some("fox"), &ScorerConfig::default());
        assert!((0.0..=100.0).contains(&result.language_score));
        assert!((0.0..=100.0).contains(&result.structure_score));
        assert!((0.0..=100.0).contains(&result.ngram_score));
        assert!((0.0..=100.0).contains(&result.exact_match_score));
        assert!((0.0..=100.0).contains(&result.overall_score));
    }

    #[test]
    fn overall_matches_weighted_sum_within_tolerance() {
        let config = ScorerConfig::default();
        let result = score("a coherent sentence with several words in it.", Some("coherent"), &config);
        let expected = config.w_lang * result.language_score
            + config.w_struct * result.structure_score
            + config.w_ngram * result.ngram_score
            + config.w_exact * result.exact_match_score;
        assert!((result.overall_score - expected).abs() < 1e-9);
    }

    #[test]
    fn natural_english_outscores_uniform_noise_on_ngram_metric() {
        let english = score(
            "the quick brown fox jumps over the lazy dog again and again",
            None,
            &ScorerConfig::default(),
        );
        let noise = score("qzxjkv wplmfb hqrstu vbnmwe", None, &ScorerConfig::default());
        assert!(
            english.ngram_score - noise.ngram_score >= 0.0,
            "english={} noise={}",
            english.ngram_score,
            noise.ngram_score
        );
    }

    #[test]
    fn confidence_level_tracks_overall_score() {
        let result = score("hello", None, &ScorerConfig::default());
        assert_eq!(result.confidence_level, ConfidenceLevel::from_overall(result.overall_score));
    }

    #[test]
    fn deterministic_across_repeated_calls() {
        let config = ScorerConfig::default();
        let first = score("deterministic output, every time.", Some("deterministic"), &config);
        let second = score("deterministic output, every time.", Some("deterministic"), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn unnormalized_weights_still_sum_overall_correctly() {
        let config = ScorerConfig {
            w_lang: 3.0,
            w_struct: 1.0,
            w_ngram: 1.0,
            w_exact: 1.0,
        };
        let result = score("some text to score.", None, &config);
        assert!((0.0..=100.0).contains(&result.overall_score));
    }
}
