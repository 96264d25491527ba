//! Query substring coverage scoring.

use std::collections::HashSet;

/// Scores how well `text` contains `query` as a literal substring, out
/// of 100.
///
/// Absent or empty `query` scores 0. Otherwise both strings are
/// lowercased and the non-overlapping occurrence count `c` of `query`
/// in `text` is computed. `c >= 1` yields a base of 70 plus
/// `min(30, 5*(c-1))` for repeated occurrences. `c == 0` falls back to
/// fractional 3-gram coverage of `query` within `text`, scaled to 50.
pub fn exact_match_score(text: &str, query: Option<&str>) -> f64 {
    let query = match query {
        Some(q) if !q.is_empty() => q,
        _ => return 0.0,
    };

    let text_lower = text.to_lowercase();
    let query_lower = query.to_lowercase();

    let occurrences = count_nonoverlapping(&text_lower, &query_lower);
    if occurrences >= 1 {
        return 70.0 + (5.0 * ((occurrences - 1) as f64)).min(30.0);
    }

    partial_trigram_coverage(&text_lower, &query_lower)
}

fn count_nonoverlapping(text: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut pos = 0;
    while let Some(found) = text[pos..].find(needle) {
        count += 1;
        pos += found + needle.len();
    }
    count
}

fn partial_trigram_coverage(text: &str, query: &str) -> f64 {
    let query_chars: Vec<char> = query.chars().collect();
    if query_chars.len() < 3 {
        return if text.contains(query) { 50.0 } else { 0.0 };
    }

    let trigrams: HashSet<String> = query_chars
        .windows(3)
        .map(|w| w.iter().collect::<String>())
        .collect();

    if trigrams.is_empty() {
        return 0.0;
    }

    let present = trigrams.iter().filter(|tri| text.contains(tri.as_str())).count();
    50.0 * (present as f64) / (trigrams.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_query_scores_zero() {
        assert_eq!(exact_match_score("any text here", None), 0.0);
    }

    #[test]
    fn empty_query_scores_zero() {
        assert_eq!(exact_match_score("any text here", Some("")), 0.0);
    }

    #[test]
    fn single_occurrence_scores_base_seventy() {
        let score = exact_match_score("find the needle in the haystack", Some("needle"));
        assert_eq!(score, 70.0);
    }

    #[test]
    fn repeated_occurrences_add_bonus() {
        let score = exact_match_score("ab ab ab ab", Some("ab"));
        // 4 non-overlapping occurrences: 70 + min(30, 5*3) = 100
        assert_eq!(score, 100.0);
    }

    #[test]
    fn bonus_is_capped_at_thirty() {
        let text = "ab ".repeat(20);
        let score = exact_match_score(&text, Some("ab"));
        assert_eq!(score, 100.0);
    }

    #[test]
    fn zero_occurrences_falls_back_to_trigram_coverage() {
        let score = exact_match_score("completely unrelated content", Some("xyzkq"));
        assert_eq!(score, 0.0);
    }

    #[test]
    fn partial_trigram_overlap_scores_between_bounds() {
        // "hello" not present verbatim, but some trigrams might overlap with "help low"
        let score = exact_match_score("help is on the way, low and slow", Some("hello"));
        assert!(score >= 0.0 && score < 70.0);
    }

    #[test]
    fn is_case_insensitive() {
        let score = exact_match_score("The Needle Is Here", Some("needle"));
        assert_eq!(score, 70.0);
    }
}
