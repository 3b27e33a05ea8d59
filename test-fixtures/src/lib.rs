//! Test fixture loader for kgvec vector files, entity lists, redirect
//! samples, and gold-standard datasets.
//!
//! Helpers panic on missing or malformed fixtures; they are only meant to be
//! called from tests and benches.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use kgvec_core::models::ScoredConcept;
use kgvec_core::traits::IVectorStore;
use kgvec_vectors::{load_word2vec_text, InMemoryVectorStore};

/// Root directory of the test-fixtures folder.
pub fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("vectors").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

/// Read a fixture file as text.
pub fn read_fixture(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load a word2vec text fixture into a store.
pub fn load_store(relative_path: &str) -> InMemoryVectorStore {
    let path = fixture_path(relative_path);
    load_word2vec_text(&path)
        .unwrap_or_else(|e| panic!("Failed to load vectors {}: {}", path.display(), e))
}

/// car / truck / banana in two dimensions.
pub fn toy_store() -> Arc<InMemoryVectorStore> {
    Arc::new(load_store("vectors/toy.txt"))
}

/// DBpedia-style store with `dbr:` keys.
pub fn dbpedia_store() -> Arc<InMemoryVectorStore> {
    Arc::new(load_store("vectors/dbpedia.txt"))
}

/// WordNet lemma store with `-n` / `-v` tagged senses.
pub fn wordnet_store() -> Arc<InMemoryVectorStore> {
    Arc::new(load_store("vectors/wordnet.txt"))
}

/// BabelNet store with `_n_EN` / `_v_EN` tagged keys.
pub fn babelnet_store() -> Arc<InMemoryVectorStore> {
    Arc::new(load_store("vectors/babelnet.txt"))
}

/// Entity list fixture as lines.
pub fn entity_list(relative_path: &str) -> Vec<String> {
    read_fixture(relative_path)
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Wraps a store and counts nearest-neighbour computations.
///
/// Used to prove that a cached query never reaches the store twice.
pub struct CountingVectorStore {
    inner: Arc<dyn IVectorStore>,
    neighbour_calls: AtomicUsize,
}

impl CountingVectorStore {
    pub fn new(inner: Arc<dyn IVectorStore>) -> Self {
        Self {
            inner,
            neighbour_calls: AtomicUsize::new(0),
        }
    }

    /// Calls to `nearest_neighbors` and `nearest_to_vector` so far.
    pub fn neighbour_calls(&self) -> usize {
        self.neighbour_calls.load(Ordering::SeqCst)
    }
}

impl IVectorStore for CountingVectorStore {
    fn contains(&self, key: &str) -> bool {
        self.inner.contains(key)
    }

    fn vector(&self, key: &str) -> Option<&[f32]> {
        self.inner.vector(key)
    }

    fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        self.inner.similarity(a, b)
    }

    fn nearest_neighbors(&self, key: &str, top_n: usize) -> Vec<ScoredConcept> {
        self.neighbour_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.nearest_neighbors(key, top_n)
    }

    fn nearest_to_vector(&self, query: &[f64], top_n: usize) -> Vec<ScoredConcept> {
        self.neighbour_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.nearest_to_vector(query, top_n)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.inner.position(key)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        self.inner.keys()
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
