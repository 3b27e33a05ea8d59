use std::sync::Arc;

use kgvec_core::config::SourceConfig;
use kgvec_core::errors::{ConfigError, KgResult};
use kgvec_core::models::{IngestStats, Resolution, ResolutionPath};
use kgvec_core::traits::IVectorStore;
use tracing::debug;

use crate::normalizer::KeyNormalizer;
use crate::pos::{self, PosTagger};
use crate::redirects::RedirectTable;
use crate::term_index::TermIndex;

/// Resolves surface forms to canonical keys of one vector store.
///
/// Pipeline: optional store probe, normalization, index lookup with one
/// case-flip retry, POS tie-break, then a single redirect hop when the
/// chosen candidate has no vector. Stateless after construction.
pub struct Linker {
    source: SourceConfig,
    normalizer: KeyNormalizer,
    tagger: PosTagger,
    index: Arc<TermIndex>,
    redirects: Arc<RedirectTable>,
    store: Arc<dyn IVectorStore>,
}

impl Linker {
    pub fn new(
        source: SourceConfig,
        normalizer: KeyNormalizer,
        index: Arc<TermIndex>,
        redirects: Arc<RedirectTable>,
        store: Arc<dyn IVectorStore>,
    ) -> Self {
        let tagger = PosTagger::new(source.pos_tag_pattern.as_deref());
        Self {
            source,
            normalizer,
            tagger,
            index,
            redirects,
            store,
        }
    }

    /// Compile `source`, build the term index from `entities` (or from the
    /// store vocabulary when `None`) and assemble the linker.
    pub fn from_source(
        source: SourceConfig,
        store: Arc<dyn IVectorStore>,
        redirects: Arc<RedirectTable>,
        entities: Option<&[String]>,
    ) -> Result<(Self, IngestStats), ConfigError> {
        let normalizer = KeyNormalizer::new(&source.rules)?;
        let (index, stats) = match entities {
            Some(entities) => TermIndex::build(entities, store.as_ref(), &redirects, &normalizer),
            None => TermIndex::from_store(store.as_ref(), &redirects, &normalizer),
        };
        Ok((Self::new(source, normalizer, Arc::new(index), redirects, store), stats))
    }

    /// Parse the redirect file for `source`, or an empty table without one.
    pub fn load_redirects(
        source: &SourceConfig,
        path: Option<&str>,
    ) -> KgResult<RedirectTable> {
        let Some(path) = path else {
            return Ok(RedirectTable::empty());
        };
        let rewriter = KeyNormalizer::new(&source.redirect_rules)?;
        Ok(RedirectTable::load(path, &rewriter)?)
    }

    /// The lookup key for `surface`. Also the cache key of closest queries.
    pub fn normalize(&self, surface: &str) -> String {
        self.normalizer.normalize(surface)
    }

    pub fn source(&self) -> &SourceConfig {
        &self.source
    }

    pub fn index(&self) -> &TermIndex {
        &self.index
    }

    /// Resolve `surface` to a single canonical key present in the store.
    pub fn resolve(&self, surface: &str, pos_hint: Option<&str>) -> Option<Resolution> {
        if let Some(key) = self.probe(surface) {
            return Some(Resolution::new(key, ResolutionPath::StoreProbe));
        }

        let Some((bucket, flipped)) = self.lookup(surface) else {
            debug!(surface, source = %self.source.name, "no index entry");
            return None;
        };
        let pos = pos::normalize_hint(pos_hint);
        let candidate = self.tagger.select(bucket, surface, pos)?;
        let path = if flipped {
            ResolutionPath::CaseFlipped
        } else {
            ResolutionPath::Direct
        };
        let resolution = self.follow(candidate, path);
        debug!(surface, candidate, resolved = resolution.is_some(), "linked");
        resolution
    }

    /// Every store-present sense of `surface`, restricted to the hint's POS
    /// tag when at least one candidate carries it.
    pub fn resolve_senses(&self, surface: &str, pos_hint: Option<&str>) -> Vec<String> {
        if let Some(key) = self.probe(surface) {
            return vec![key];
        }
        let Some((bucket, _)) = self.lookup(surface) else {
            return Vec::new();
        };
        let pos = pos_hint.map(|h| pos::normalize_hint(Some(h)));

        let mut senses: Vec<String> = Vec::new();
        for candidate in self.tagger.filter(bucket, pos) {
            if let Some(resolution) = self.follow(candidate, ResolutionPath::Direct) {
                if !senses.contains(&resolution.key) {
                    senses.push(resolution.key);
                }
            }
        }
        senses
    }

    /// Bucket for the normalized surface, retrying once with the first
    /// character upper-cased. The flag is set when the retry matched.
    fn lookup(&self, surface: &str) -> Option<(&[String], bool)> {
        let key = self.normalizer.normalize(surface);
        if key.is_empty() {
            return None;
        }
        if let Some(bucket) = self.index.get(&key) {
            return Some((bucket, false));
        }
        if !self.source.case_flip {
            return None;
        }
        let flipped = upper_first(&key)?;
        self.index.get(&flipped).map(|bucket| (bucket, true))
    }

    /// Keep `candidate` if it has a vector, else take one redirect hop.
    fn follow(&self, candidate: &str, path: ResolutionPath) -> Option<Resolution> {
        if self.store.contains(candidate) {
            return Some(Resolution::new(candidate, path));
        }
        let target = self.redirects.get(candidate)?;
        if self.store.contains(target) {
            debug!(candidate, target, "redirect followed");
            Some(Resolution::new(target, ResolutionPath::Redirected))
        } else {
            None
        }
    }

    /// Test the surface itself, its underscored form and each prefixed form
    /// against the store.
    fn probe(&self, surface: &str) -> Option<String> {
        if !self.source.store_probe {
            return None;
        }
        let raw = surface.trim();
        if raw.is_empty() {
            return None;
        }
        if self.store.contains(raw) {
            return Some(raw.to_string());
        }
        let underscored = raw.replace(' ', "_");
        if self.store.contains(&underscored) {
            return Some(underscored);
        }
        self.source
            .probe_prefixes
            .iter()
            .map(|prefix| format!("{prefix}{underscored}"))
            .find(|key| self.store.contains(key))
    }
}

/// `key` with its first character upper-cased, if that character is
/// lower-case.
fn upper_first(key: &str) -> Option<String> {
    let mut chars = key.chars();
    let first = chars.next()?;
    if !first.is_lowercase() {
        return None;
    }
    let mut flipped: String = first.to_uppercase().collect();
    flipped.push_str(chars.as_str());
    Some(flipped)
}
