// Plain text documents (.txt, .md): read the file, replacing invalid UTF-8.

use std::path::Path;

use crate::config::reference_id;
use crate::error::ExtractionError;

use super::traits::DocumentExtractor;

#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl DocumentExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(path).map_err(|e| ExtractionError::new(reference_id(path), e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, b"caf\xe9 bar").unwrap();

        let text = PlainTextExtractor.extract(&path).unwrap();
        assert!(text.starts_with("caf"));
        assert!(text.ends_with(" bar"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = PlainTextExtractor
            .extract(Path::new("/nope/missing.txt"))
            .unwrap_err();
        assert_eq!(err.source_id, "/nope/missing.txt");
    }
}
