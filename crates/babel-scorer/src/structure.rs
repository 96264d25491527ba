//! Punctuation and sentence-cadence structure scoring.

/// Scores `text`'s sentence/punctuation structure out of 100.
///
/// Components (see module-level algorithm in the scoring design):
/// - base 30 if the text contains at least one of `. ! ?`.
/// - +20 if the period count lies in `[3, text_len/80]`.
/// - +20 if `, ` (comma-space) appears at least twice.
/// - +15 if the letter ratio lies in `[0.55, 0.85]`.
/// - +15 if the space ratio lies in `[0.10, 0.25]`.
///
/// The sum is clipped to 100. Empty text scores 0.
pub fn structure_score(text: &str) -> f64 {
    let text_len = text.chars().count();
    if text_len == 0 {
        return 0.0;
    }

    let mut score = 0.0;

    let has_terminal_punct = text.chars().any(|c| matches!(c, '.' | '!' | '?'));
    if has_terminal_punct {
        score += 30.0;
    }

    let period_count = text.chars().filter(|&c| c == '.').count();
    let upper_bound = (text_len as f64) / 80.0;
    if (3..).contains(&period_count) && (period_count as f64) <= upper_bound {
        score += 20.0;
    }

    let comma_space_count = text.matches(", ").count();
    if comma_space_count >= 2 {
        score += 20.0;
    }

    let letter_count = text.chars().filter(|c| c.is_ascii_alphabetic()).count();
    let letter_ratio = (letter_count as f64) / (text_len.max(1) as f64);
    if (0.55..=0.85).contains(&letter_ratio) {
        score += 15.0;
    }

    let space_count = text.chars().filter(|&c| c == ' ').count();
    let space_ratio = (space_count as f64) / (text_len.max(1) as f64);
    if (0.10..=0.25).contains(&space_ratio) {
        score += 15.0;
    }

    score.min(100.0)
}
