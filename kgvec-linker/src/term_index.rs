use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use kgvec_core::errors::IngestError;
use kgvec_core::models::IngestStats;
use kgvec_core::traits::IVectorStore;
use tracing::{debug, info};

use crate::normalizer::KeyNormalizer;
use crate::redirects::RedirectTable;

/// Normalized key → ordered canonical-key candidates.
///
/// Buckets are append-only and never hold the same key twice, so several
/// keys that normalize alike (`Berlin`, `berlin`, `Berlin_(band)`) all
/// survive in ingestion order.
#[derive(Debug, Clone, Default)]
pub struct TermIndex {
    buckets: HashMap<String, Vec<String>>,
    candidates: usize,
}

impl TermIndex {
    /// Index the candidate keys in `entities`.
    ///
    /// A key present in the store is indexed; a key absent from the store
    /// but known as a redirect alias is indexed too and followed at link
    /// time; anything else is skipped.
    pub fn build<I, S>(
        entities: I,
        store: &dyn IVectorStore,
        redirects: &RedirectTable,
        normalizer: &KeyNormalizer,
    ) -> (Self, IngestStats)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        let mut stats = IngestStats::default();

        for entity in entities {
            let key = entity.as_ref();
            let in_store = store.contains(key);
            if !in_store && !redirects.contains(key) {
                stats.not_found += 1;
                continue;
            }
            let normalized = normalizer.normalize(key);
            if normalized.is_empty() {
                stats.not_found += 1;
                continue;
            }
            if !index.push(normalized, key) {
                stats.duplicates += 1;
            } else if in_store {
                stats.indexed += 1;
            } else {
                stats.via_redirect += 1;
            }
        }

        info!(
            buckets = index.len(),
            indexed = stats.indexed,
            via_redirect = stats.via_redirect,
            not_found = stats.not_found,
            duplicates = stats.duplicates,
            "term index built"
        );
        (index, stats)
    }

    /// Index the store's own vocabulary followed by every redirect alias
    /// that is not itself a store key.
    pub fn from_store(
        store: &dyn IVectorStore,
        redirects: &RedirectTable,
        normalizer: &KeyNormalizer,
    ) -> (Self, IngestStats) {
        let aliases = redirects.aliases().filter(|alias| !store.contains(alias));
        Self::build(store.keys().chain(aliases), store, redirects, normalizer)
    }

    fn push(&mut self, normalized: String, key: &str) -> bool {
        let bucket = self.buckets.entry(normalized).or_default();
        if bucket.iter().any(|existing| existing == key) {
            debug!(key, "duplicate candidate skipped");
            return false;
        }
        bucket.push(key.to_string());
        self.candidates += 1;
        true
    }

    /// Candidates for a normalized key.
    pub fn get(&self, normalized: &str) -> Option<&[String]> {
        self.buckets.get(normalized).map(Vec::as_slice)
    }

    pub fn contains(&self, normalized: &str) -> bool {
        self.buckets.contains_key(normalized)
    }

    /// Number of distinct normalized keys.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of canonical keys across all buckets.
    pub fn candidate_count(&self) -> usize {
        self.candidates
    }
}

/// Read newline-delimited entity keys, skipping blank lines.
pub fn read_entities<R: BufRead>(reader: R) -> Result<Vec<String>, IngestError> {
    let mut entities = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| IngestError::Io {
            path: "<reader>".to_string(),
            reason: e.to_string(),
        })?;
        let entity = line.trim_end_matches('\r');
        if entity.trim().is_empty() {
            continue;
        }
        entities.push(entity.to_string());
    }
    Ok(entities)
}

/// Read an entity file from disk.
pub fn read_entity_file(path: impl AsRef<Path>) -> Result<Vec<String>, IngestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| IngestError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let entities = read_entities(BufReader::new(file))?;
    info!(path = %path.display(), entities = entities.len(), "entity file read");
    Ok(entities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kgvec_core::SourceConfig;
    use kgvec_vectors::InMemoryVectorStore;

    fn store() -> InMemoryVectorStore {
        InMemoryVectorStore::from_pairs([
            ("Berlin", vec![1.0, 0.0]),
            ("New_Name", vec![0.0, 1.0]),
            ("Berlin-Mitte", vec![0.5, 0.5]),
        ])
        .unwrap()
    }

    fn dbpedia() -> KeyNormalizer {
        KeyNormalizer::new(&SourceConfig::dbpedia().rules).unwrap()
    }

    #[test]
    fn counts_every_outcome() {
        let redirects = RedirectTable::from_pairs([("Old_Name", "New_Name")]);
        let entities = ["Berlin", "Old_Name", "Atlantis", "Berlin", "New_Name"];
        let (index, stats) = TermIndex::build(entities, &store(), &redirects, &dbpedia());
        assert_eq!(stats.indexed, 2);
        assert_eq!(stats.via_redirect, 1);
        assert_eq!(stats.not_found, 1);
        assert_eq!(stats.duplicates, 1);
        assert_eq!(stats.total(), entities.len());
        assert_eq!(index.get("Old_Name"), Some(&["Old_Name".to_string()][..]));
        assert!(!index.contains("Atlantis"));
    }

    #[test]
    fn colliding_keys_share_a_bucket_in_order() {
        let store = InMemoryVectorStore::from_pairs([
            ("Berlin-Mitte", vec![1.0, 0.0]),
            ("Berlin_Mitte", vec![0.0, 1.0]),
        ])
        .unwrap();
        let (index, _) =
            TermIndex::build(["Berlin_Mitte", "Berlin-Mitte"], &store, &RedirectTable::empty(), &dbpedia());
        assert_eq!(
            index.get("Berlin_Mitte").unwrap(),
            &["Berlin_Mitte".to_string(), "Berlin-Mitte".to_string()]
        );
        assert_eq!(index.candidate_count(), 2);
    }

    #[test]
    fn from_store_adds_aliases() {
        let redirects = RedirectTable::from_pairs([("Old_Name", "New_Name"), ("Berlin", "New_Name")]);
        let (index, stats) = TermIndex::from_store(&store(), &redirects, &dbpedia());
        assert_eq!(stats.indexed, 3);
        assert_eq!(stats.via_redirect, 1);
        assert_eq!(stats.duplicates, 0);
        assert!(index.contains("Old_Name"));
        assert!(index.contains("Berlin_Mitte"));
    }

    #[test]
    fn reproducible() {
        let redirects = RedirectTable::empty();
        let (a, _) = TermIndex::from_store(&store(), &redirects, &dbpedia());
        let (b, _) = TermIndex::from_store(&store(), &redirects, &dbpedia());
        for key in ["Berlin", "New_Name", "Berlin_Mitte"] {
            assert_eq!(a.get(key), b.get(key));
        }
    }

    #[test]
    fn entity_lines_are_cleaned() {
        let entities = read_entities("Berlin\r\n\n  \nNew_Name\n".as_bytes()).unwrap();
        assert_eq!(entities, vec!["Berlin", "New_Name"]);
    }
}
