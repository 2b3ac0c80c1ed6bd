use std::env;
use std::path::{Path, PathBuf};

use crate::error::ConfigurationError;

/// Reference set used when DOCMATCH_REFERENCES is not set.
pub const DEFAULT_REFERENCES: [&str; 4] = ["ref1.pdf", "ref2.pdf", "ref3.pdf", "ref4.pdf"];

/// Default location of the flat-file reference cache.
pub const DEFAULT_CACHE_PATH: &str = "./refs.json";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy; CLI flags can override
/// individual values afterwards with the `with_*` builders.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Reference document paths, in the order results are reported
    pub references: Vec<PathBuf>,
    /// Where the normalized reference token sets are persisted
    pub cache_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            references: DEFAULT_REFERENCES.iter().map(PathBuf::from).collect(),
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn load() -> Self {
        let defaults = Self::default();

        let references = env::var("DOCMATCH_REFERENCES")
            .ok()
            .map(|raw| parse_reference_list(&raw))
            .filter(|refs| !refs.is_empty())
            .unwrap_or(defaults.references);

        let cache_path = env::var("DOCMATCH_CACHE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.cache_path);

        Self {
            references,
            cache_path,
        }
    }

    /// Replace the reference list (e.g. from repeated `--reference` flags).
    /// An empty list leaves the current references untouched.
    pub fn with_references(mut self, references: Vec<PathBuf>) -> Self {
        if !references.is_empty() {
            self.references = references;
        }
        self
    }

    pub fn with_cache_path(mut self, cache_path: Option<PathBuf>) -> Self {
        if let Some(path) = cache_path {
            self.cache_path = path;
        }
        self
    }

    /// Identifiers for every configured reference, in configured order.
    pub fn reference_ids(&self) -> Vec<String> {
        self.references.iter().map(|p| reference_id(p)).collect()
    }

    /// Check that every configured reference exists on disk.
    ///
    /// Reports all missing identifiers at once, not just the first.
    pub fn require_references(&self) -> Result<(), ConfigurationError> {
        check_references(&self.references)
    }
}

/// Check that every path in `references` exists, collecting all that don't.
pub fn check_references(references: &[PathBuf]) -> Result<(), ConfigurationError> {
    if references.is_empty() {
        return Err(ConfigurationError::NoReferences);
    }

    let missing: Vec<String> = references
        .iter()
        .filter(|p| !p.exists())
        .map(|p| reference_id(p))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigurationError::MissingReferences(missing))
    }
}

/// The identifier a reference is known by: its path exactly as configured.
pub fn reference_id(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn parse_reference_list(raw: &str) -> Vec<PathBuf> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_four_references() {
        let config = Config::default();
        assert_eq!(
            config.reference_ids(),
            vec!["ref1.pdf", "ref2.pdf", "ref3.pdf", "ref4.pdf"]
        );
        assert_eq!(config.cache_path, PathBuf::from("./refs.json"));
    }

    #[test]
    fn test_parse_reference_list_trims_and_skips_blanks() {
        let refs = parse_reference_list(" a.pdf, ,b.txt ,");
        assert_eq!(refs, vec![PathBuf::from("a.pdf"), PathBuf::from("b.txt")]);
    }

    #[test]
    fn test_with_references_ignores_empty_override() {
        let config = Config::default().with_references(vec![]);
        assert_eq!(config.references.len(), 4);

        let config = config.with_references(vec![PathBuf::from("only.pdf")]);
        assert_eq!(config.reference_ids(), vec!["only.pdf"]);
    }

    #[test]
    fn test_require_references_reports_every_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("present.txt");
        std::fs::write(&present, "hello").unwrap();

        let config = Config {
            references: vec![
                dir.path().join("gone1.pdf"),
                present,
                dir.path().join("gone2.pdf"),
            ],
            cache_path: dir.path().join("refs.json"),
        };

        let err = config.require_references().unwrap_err();
        let missing = err.missing();
        assert_eq!(missing.len(), 2);
        assert!(missing[0].ends_with("gone1.pdf"));
        assert!(missing[1].ends_with("gone2.pdf"));
    }

    #[test]
    fn test_require_references_empty_list() {
        let config = Config {
            references: vec![],
            cache_path: PathBuf::from("refs.json"),
        };
        assert_eq!(
            config.require_references(),
            Err(ConfigurationError::NoReferences)
        );
    }
}
