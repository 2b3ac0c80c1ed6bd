// Comparison workflow: score one document against every cached reference.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::cache::ReferenceCache;
use crate::config::reference_id;
use crate::error::ExtractionError;
use crate::extract::extract_or_empty;
use crate::extract::traits::DocumentExtractor;
use crate::similarity::jaccard_percent;
use crate::text::normalizer::Normalizer;
use crate::text::tokens::TokenSet;

/// Similarity of the compared document to one reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceScore {
    pub reference: String,
    /// Percentage in [0, 100], two decimal places
    pub score: f64,
}

/// Scores against every reference, in configured reference order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub scores: Vec<ReferenceScore>,
}

impl ComparisonResult {
    /// The highest-scoring reference. Ties go to the earliest configured one.
    pub fn best_match(&self) -> Option<&ReferenceScore> {
        self.scores.iter().fold(None, |best, candidate| match best {
            Some(b) if b.score >= candidate.score => Some(b),
            _ => Some(candidate),
        })
    }

    pub fn score_for(&self, reference: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.reference == reference)
            .map(|s| s.score)
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Score an already-normalized token set against every cached reference.
pub fn compare_tokens(tokens: &TokenSet, cache: &ReferenceCache) -> ComparisonResult {
    let scores = cache
        .entries()
        .iter()
        .map(|entry| ReferenceScore {
            reference: entry.id.clone(),
            score: jaccard_percent(tokens, &entry.tokens),
        })
        .collect();
    ComparisonResult { scores }
}

/// A comparison of one document, with anything worth warning about.
#[derive(Debug)]
pub struct ComparisonReport {
    pub document: String,
    pub token_count: usize,
    pub result: ComparisonResult,
    /// Set when the document could not be read; it was scored as empty text
    pub warning: Option<ExtractionError>,
    /// References that could not be read when the cache was built
    pub reference_warnings: Vec<String>,
}

/// Extract, normalize, and score one document against the reference cache.
///
/// An unreadable document is not an error here: it is scored as empty text
/// (so every score is 0) and the extraction error comes back in `warning`.
pub fn compare_document(
    path: &Path,
    extractor: &dyn DocumentExtractor,
    normalizer: &Normalizer,
    cache: &ReferenceCache,
) -> ComparisonReport {
    let (text, warning) = extract_or_empty(extractor, path);
    let tokens = normalizer.normalize(&text);
    let result = compare_tokens(&tokens, cache);

    if let Some(best) = result.best_match() {
        info!(
            document = %path.display(),
            tokens = tokens.len(),
            best = %best.reference,
            score = best.score,
            "Compared document"
        );
    }

    ComparisonReport {
        document: reference_id(path),
        token_count: tokens.len(),
        result,
        warning,
        reference_warnings: cache.warnings().iter().map(ToString::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(scores: &[(&str, f64)]) -> ComparisonResult {
        ComparisonResult {
            scores: scores
                .iter()
                .map(|(r, s)| ReferenceScore {
                    reference: r.to_string(),
                    score: *s,
                })
                .collect(),
        }
    }

    #[test]
    fn test_best_match_picks_maximum() {
        let r = result(&[("a", 10.0), ("b", 42.5), ("c", 3.0)]);
        let best = r.best_match().unwrap();
        assert_eq!(best.reference, "b");
        assert_eq!(best.score, 42.5);
    }

    #[test]
    fn test_best_match_ties_go_to_first_configured() {
        let r = result(&[("a", 5.0), ("b", 20.0), ("c", 20.0)]);
        assert_eq!(r.best_match().unwrap().reference, "b");

        let all_zero = result(&[("x", 0.0), ("y", 0.0)]);
        assert_eq!(all_zero.best_match().unwrap().reference, "x");
    }

    #[test]
    fn test_best_match_none_without_references() {
        assert!(ComparisonResult::default().best_match().is_none());
    }

    #[test]
    fn test_score_for_lookup() {
        let r = result(&[("a", 1.5)]);
        assert_eq!(r.score_for("a"), Some(1.5));
        assert_eq!(r.score_for("zzz"), None);
    }
}
