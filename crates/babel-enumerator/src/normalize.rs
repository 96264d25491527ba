//! Query normalization: lowercase, collapse internal whitespace, trim edges.

/// Normalizes `query` for n-gram extraction: lowercases, collapses runs of
/// whitespace to a single ASCII space, and trims leading/trailing whitespace.
pub fn normalize_query(query: &str) -> String {
    let mut normalized = String::with_capacity(query.len());
    let mut in_whitespace = true;
    for ch in query.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                normalized.push(' ');
                in_whitespace = true;
            }
        } else {
            normalized.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }
    if normalized.ends_with(' ') {
        normalized.pop();
    }
    normalized
}
