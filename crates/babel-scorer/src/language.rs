//! English-likeness scoring by common-word token density.

/// A curated list of ~100 common English function words: articles,
/// pronouns, common verbs, prepositions, and conjunctions.
pub const COMMON_WORDS: [&str; 100] = [
    "the", "a", "an", "and", "or", "but", "if", "so", "because", "as",
    "that", "this", "these", "those", "is", "are", "was", "were", "be",
    "been", "being", "am", "have", "has", "had", "do", "does", "did",
    "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "i", "you", "he", "she", "it", "we", "they", "me", "him",
    "her", "us", "them", "my", "your", "his", "its", "our", "their",
    "mine", "yours", "hers", "ours", "theirs", "to", "of", "in", "on",
    "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "from",
    "up", "down", "out", "off", "over", "under", "again", "further",
    "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "not",
];

/// Scores `text` by the fraction of whitespace-tokenized, lowercased
/// tokens that appear in [`COMMON_WORDS`].
///
/// Returns `min(100, round(100 * k / max(1, n)))` where `n` is the token
/// count and `k` the count of tokens found in the common-word list.
/// Empty text yields `0`.
pub fn language_score(text: &str) -> f64 {
    let tokens: Vec<String> = text
        .split_whitespace()
        .map(|tok| tok.to_lowercase())
        .collect();

    let n = tokens.len();
    if n == 0 {
        return 0.0;
    }

    let k = tokens
        .iter()
        .filter(|tok| COMMON_WORDS.contains(&tok.as_str()))
        .count();

    let raw = 100.0 * (k as f64) / (n.max(1) as f64);
    raw.round().min(100.0)
}
