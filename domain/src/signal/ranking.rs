//! Deterministic keyword ranking

use std::collections::BTreeSet;

const TRAILING_PUNCTUATION: [char; 4] = [',', '.', '?', '!'];

/// Rank the distinctive words of `text` and return the top `limit`.
///
/// Tokens are split on whitespace, stripped of trailing `, . ? !`,
/// lowercased and deduplicated; tokens of three characters or fewer are
/// dropped. Ordering is by length descending, then lexicographically
/// ascending, so the result is fully deterministic.
pub fn rank_keywords(text: &str, limit: usize) -> Vec<String> {
    let unique: BTreeSet<String> = text
        .split_whitespace()
        .map(|token| token.trim_end_matches(TRAILING_PUNCTUATION).to_lowercase())
        .filter(|token| token.chars().count() > 3)
        .collect();

    let mut ranked: Vec<String> = unique.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    ranked.truncate(limit);
    ranked
}
