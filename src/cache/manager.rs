// Cache lifecycle: resolve the reference cache from Uninitialized to Ready.
//
// `load_or_build` is the single entry point. It always checks that every
// configured reference exists first, then either loads the persisted store
// or extracts + normalizes every reference and persists the result. Either
// way the caller gets the same `ReferenceCache` back.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::config::{check_references, reference_id, Config};
use crate::error::ExtractionError;
use crate::extract::extract_or_empty;
use crate::extract::traits::DocumentExtractor;
use crate::text::normalizer::Normalizer;
use crate::text::tokens::TokenSet;

use super::store::{CacheStore, JsonFileStore, ReferenceEntry, StoredCache};

/// Where a ready cache came from. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOrigin {
    /// Read from the persisted store without touching the references
    Loaded,
    /// Built from the reference documents during this run
    Built,
}

/// Normalized token sets for every configured reference, in configured order.
#[derive(Debug)]
pub struct ReferenceCache {
    entries: Vec<ReferenceEntry>,
    built_at: DateTime<Utc>,
    origin: CacheOrigin,
    warnings: Vec<ExtractionError>,
}

impl ReferenceCache {
    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&TokenSet> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.tokens)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    pub fn origin(&self) -> CacheOrigin {
        self.origin
    }

    /// Extraction failures hit while building. Always empty for a loaded cache.
    pub fn warnings(&self) -> &[ExtractionError] {
        &self.warnings
    }
}

/// The two lifecycle states of the reference cache.
#[derive(Debug)]
pub enum CacheState {
    Uninitialized,
    Ready(ReferenceCache),
}

/// Owns the reference list, the persisted store, and the cache state.
pub struct CacheManager<S: CacheStore> {
    references: Vec<PathBuf>,
    store: S,
    state: CacheState,
}

impl CacheManager<JsonFileStore> {
    /// Manager over the configured references and JSON store path.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.references.clone(),
            JsonFileStore::new(config.cache_path.clone()),
        )
    }
}

impl<S: CacheStore> CacheManager<S> {
    pub fn new(references: Vec<PathBuf>, store: S) -> Self {
        Self {
            references,
            store,
            state: CacheState::Uninitialized,
        }
    }

    pub fn state(&self) -> &CacheState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The ready cache, if `load_or_build` has succeeded.
    pub fn cache(&self) -> Option<&ReferenceCache> {
        match &self.state {
            CacheState::Ready(cache) => Some(cache),
            CacheState::Uninitialized => None,
        }
    }

    /// Resolve the cache to Ready, loading the store or building it.
    ///
    /// Fails with a `ConfigurationError` (inside the anyhow error) listing
    /// every missing reference; nothing is extracted in that case. A
    /// reference that fails to extract is cached with an empty token set and
    /// reported through `ReferenceCache::warnings`.
    pub fn load_or_build(
        &mut self,
        extractor: &dyn DocumentExtractor,
        normalizer: &Normalizer,
    ) -> Result<&ReferenceCache> {
        if !matches!(self.state, CacheState::Ready(_)) {
            check_references(&self.references)?;

            let cache = match self.load_matching()? {
                Some(stored) => {
                    info!(
                        store = %self.store.location(),
                        references = stored.references.len(),
                        "Loaded reference cache"
                    );
                    ReferenceCache {
                        entries: stored.references,
                        built_at: stored.built_at,
                        origin: CacheOrigin::Loaded,
                        warnings: Vec::new(),
                    }
                }
                None => self.build(extractor, normalizer)?,
            };
            self.state = CacheState::Ready(cache);
        }

        self.cache().context("reference cache did not reach the ready state")
    }

    /// Delete the persisted store and drop back to Uninitialized.
    pub fn invalidate(&mut self) -> Result<bool> {
        let removed = self.store.clear()?;
        self.state = CacheState::Uninitialized;
        if removed {
            info!(store = %self.store.location(), "Deleted reference cache");
        }
        Ok(removed)
    }

    /// Load the store, accepting it only if it covers exactly the configured
    /// references in configured order.
    fn load_matching(&self) -> Result<Option<StoredCache>> {
        let Some(stored) = self.store.load()? else {
            return Ok(None);
        };

        let expected: Vec<String> = self.references.iter().map(|p| reference_id(p)).collect();
        if stored.ids().eq(expected.iter().map(String::as_str)) {
            Ok(Some(stored))
        } else {
            warn!(
                store = %self.store.location(),
                "Cached references differ from configured references, rebuilding"
            );
            Ok(None)
        }
    }

    fn build(
        &self,
        extractor: &dyn DocumentExtractor,
        normalizer: &Normalizer,
    ) -> Result<ReferenceCache> {
        info!(references = self.references.len(), "Building reference cache");

        let pb = ProgressBar::new(self.references.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .expect("valid template")
                .progress_chars("=> "),
        );

        let mut entries = Vec::with_capacity(self.references.len());
        let mut warnings = Vec::new();

        for path in &self.references {
            let id = reference_id(path);
            pb.set_message(id.clone());

            let (text, warning) = extract_or_empty(extractor, path);
            if let Some(e) = warning {
                warnings.push(e);
            }
            let tokens = normalizer.normalize(&text);
            info!(reference = %id, tokens = tokens.len(), "Normalized reference");

            entries.push(ReferenceEntry { id, tokens });
            pb.inc(1);
        }
        pb.finish_and_clear();

        let stored = StoredCache::new(entries);
        self.store.save(&stored)?;

        Ok(ReferenceCache {
            entries: stored.references,
            built_at: stored.built_at,
            origin: CacheOrigin::Built,
            warnings,
        })
    }
}
