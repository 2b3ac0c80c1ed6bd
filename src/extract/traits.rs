// Document extractor trait: swap-ready abstraction over file formats.

use std::path::Path;

use crate::error::ExtractionError;

/// Trait for turning a document on disk into raw text.
pub trait DocumentExtractor {
    /// Extract the full text of the document at `path`.
    ///
    /// Multi-page formats concatenate page texts in page order.
    fn extract(&self, path: &Path) -> Result<String, ExtractionError>;
}
