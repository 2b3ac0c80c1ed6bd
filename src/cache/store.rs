// Flat-file persistence for the reference cache.
//
// The store holds one JSON document:
//   { "format_version": 1, "built_at": "...", "references": [{ "id", "tokens" }] }
//
// A file with a different format_version, or one that fails to parse, is
// treated as absent so the caller rebuilds it. Writes go to a temp file in
// the same directory and are renamed over the target, so a reader never
// sees a half-written store.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::text::tokens::TokenSet;

/// Bump whenever the serialized shape changes.
pub const FORMAT_VERSION: u32 = 1;

/// One reference document and its normalized tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub id: String,
    pub tokens: TokenSet,
}

/// Everything persisted in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCache {
    pub format_version: u32,
    pub built_at: DateTime<Utc>,
    /// In configured reference order
    pub references: Vec<ReferenceEntry>,
}

impl StoredCache {
    pub fn new(references: Vec<ReferenceEntry>) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            built_at: Utc::now(),
            references,
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.references.iter().map(|r| r.id.as_str())
    }
}

/// Persistence backend for the reference cache.
///
/// `load` returns `Ok(None)` when there is nothing usable to load; the
/// caller treats that the same as a first run.
pub trait CacheStore {
    fn load(&self) -> Result<Option<StoredCache>>;

    /// Replace the whole store with `cache`.
    fn save(&self, cache: &StoredCache) -> Result<()>;

    /// Delete the store. Returns whether anything was removed.
    fn clear(&self) -> Result<bool>;

    /// Human-readable location, for logs and status output.
    fn location(&self) -> String;
}

/// JSON file store at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

#[derive(Deserialize)]
struct VersionProbe {
    format_version: u32,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn parent_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
    }
}

impl CacheStore for JsonFileStore {
    fn load(&self) -> Result<Option<StoredCache>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read cache store {}", self.path.display()))?;

        match serde_json::from_str::<VersionProbe>(&raw) {
            Ok(probe) if probe.format_version == FORMAT_VERSION => {}
            Ok(probe) => {
                warn!(
                    path = %self.path.display(),
                    found = probe.format_version,
                    expected = FORMAT_VERSION,
                    "Cache store has an incompatible format, ignoring it"
                );
                return Ok(None);
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Cache store is unreadable, ignoring it");
                return Ok(None);
            }
        }

        match serde_json::from_str::<StoredCache>(&raw) {
            Ok(cache) => Ok(Some(cache)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Cache store is unreadable, ignoring it");
                Ok(None)
            }
        }
    }

    fn save(&self, cache: &StoredCache) -> Result<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory for cache store: {}", dir.display()))?;

        let tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer(&mut writer, cache).context("Failed to serialize reference cache")?;
            writer.flush().context("Failed to flush reference cache")?;
        }
        tmp.as_file()
            .sync_all()
            .context("Failed to sync reference cache to disk")?;
        tmp.persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to move cache store into place at {}", self.path.display()))?;

        info!(
            path = %self.path.display(),
            references = cache.references.len(),
            "Saved reference cache"
        );
        Ok(())
    }

    fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to delete cache store {}", self.path.display())),
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
