// Jaccard similarity between two token sets, as a percentage.
//
//   |A ∩ B| / |A ∪ B| * 100, rounded to two decimal places
//
// If either side is empty the score is 0. Two empty sets also score 0, not
// 100: an empty document never counts as a match.

use crate::text::tokens::TokenSet;

/// Compute the Jaccard similarity of two token sets.
///
/// Returns a score from 0.0 (no shared tokens) to 100.0 (identical sets).
/// Symmetric in its arguments.
pub fn jaccard_percent(a: &TokenSet, b: &TokenSet) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection_len(b);
    let union = a.union_len(b);

    round2(intersection as f64 / union as f64 * 100.0)
}

/// Exact halves round to the even neighbour: 3.125 -> 3.12, 9.375 -> 9.38.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
