// Text extraction: document on disk in, raw text out.
//
// The DocumentExtractor trait lets the cache and comparison workflow run
// against fakes in tests. AutoExtractor picks a backend from the file
// extension.

pub mod plain;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod traits;

use std::path::Path;

use tracing::warn;

use crate::error::ExtractionError;
use traits::DocumentExtractor;

/// Extensions read as plain text rather than parsed as PDF.
const PLAIN_TEXT_EXTENSIONS: [&str; 3] = ["txt", "text", "md"];

/// Dispatches on file extension: plain text for .txt/.text/.md, PDF otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoExtractor;

impl DocumentExtractor for AutoExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        if is_plain_text(path) {
            return plain::PlainTextExtractor.extract(path);
        }
        extract_pdf(path)
    }
}

#[cfg(feature = "pdf")]
fn extract_pdf(path: &Path) -> Result<String, ExtractionError> {
    pdf::PdfExtractor.extract(path)
}

#[cfg(not(feature = "pdf"))]
fn extract_pdf(path: &Path) -> Result<String, ExtractionError> {
    Err(ExtractionError::new(
        crate::config::reference_id(path),
        "PDF support is not compiled in (rebuild with --features pdf)",
    ))
}

fn is_plain_text(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            PLAIN_TEXT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Extract text, degrading a failure to empty text.
///
/// The error is logged and handed back so the caller can show it; the
/// returned text is always usable downstream.
pub fn extract_or_empty(
    extractor: &dyn DocumentExtractor,
    path: &Path,
) -> (String, Option<ExtractionError>) {
    match extractor.extract(path) {
        Ok(text) => (text, None),
        Err(e) => {
            warn!(source = %e.source_id, error = %e.cause, "Extraction failed, using empty text");
            (String::new(), Some(e))
        }
    }
}
