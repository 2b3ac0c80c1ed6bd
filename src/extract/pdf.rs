// PDF text extraction via lopdf.
//
// The file handle lives only inside `extract` and is dropped on every exit
// path, including parse failures. Pages are read in page-number order and
// their texts concatenated.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use lopdf::Document;
use tracing::debug;

use crate::config::reference_id;
use crate::error::ExtractionError;

use super::traits::DocumentExtractor;

#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl DocumentExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let id = reference_id(path);

        let document = {
            let file = File::open(path).map_err(|e| ExtractionError::new(id.clone(), e))?;
            Document::load_from(BufReader::new(file))
                .map_err(|e| ExtractionError::new(id.clone(), e))?
        };

        // get_pages() is keyed by page number, so BTreeMap order is page order.
        let pages = document.get_pages();
        let mut text = String::new();
        for &page_number in pages.keys() {
            let page_text = document
                .extract_text(&[page_number])
                .map_err(|e| ExtractionError::new(id.clone(), e))?;
            text.push_str(&page_text);
        }

        debug!(source = %id, pages = pages.len(), chars = text.len(), "Extracted PDF text");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_fail_with_source_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"this is not a pdf at all").unwrap();

        let err = PdfExtractor.extract(&path).unwrap_err();
        assert_eq!(err.source_id, path.to_string_lossy());
    }

    #[test]
    fn test_missing_file_fails() {
        let err = PdfExtractor
            .extract(Path::new("/nope/missing.pdf"))
            .unwrap_err();
        assert_eq!(err.source_id, "/nope/missing.pdf");
    }
}
