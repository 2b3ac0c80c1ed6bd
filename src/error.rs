// Error taxonomy for the comparison workflow.
//
// Configuration errors block the workflow until the user fixes them.
// Extraction errors are per-document: callers substitute empty text and
// carry the error along as a warning.

use std::error::Error as StdError;

use thiserror::Error;

/// Boxed underlying cause of an extraction failure.
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// A document could not be opened or parsed.
#[derive(Debug, Error)]
#[error("could not extract text from {source_id}: {cause}")]
pub struct ExtractionError {
    /// The path (or upload handle) that failed
    pub source_id: String,
    /// What went wrong underneath
    #[source]
    pub cause: Cause,
}

impl ExtractionError {
    pub fn new(source_id: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self {
            source_id: source_id.into(),
            cause: cause.into(),
        }
    }
}

/// The configured reference set is unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Every configured reference that is not on disk, in configured order.
    #[error("{} reference document(s) missing: {}", .0.len(), .0.join(", "))]
    MissingReferences(Vec<String>),

    #[error("no reference documents configured")]
    NoReferences,
}

impl ConfigurationError {
    /// The missing identifiers, if this is a missing-reference error.
    pub fn missing(&self) -> &[String] {
        match self {
            Self::MissingReferences(ids) => ids,
            Self::NoReferences => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_error_names_source_and_cause() {
        let err = ExtractionError::new("upload.pdf", "bad xref table");
        let msg = err.to_string();
        assert!(msg.contains("upload.pdf"), "got: {msg}");
        assert!(msg.contains("bad xref table"), "got: {msg}");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_missing_references_lists_all() {
        let err = ConfigurationError::MissingReferences(vec![
            "ref1.pdf".to_string(),
            "ref3.pdf".to_string(),
        ]);
        assert_eq!(err.missing().len(), 2);
        assert_eq!(
            err.to_string(),
            "2 reference document(s) missing: ref1.pdf, ref3.pdf"
        );
    }
}
