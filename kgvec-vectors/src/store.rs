//! Immutable in-memory vector store.

use std::collections::HashMap;

use kgvec_core::errors::VectorStoreError;
use kgvec_core::models::ScoredConcept;
use kgvec_core::traits::IVectorStore;
use rayon::prelude::*;
use tracing::debug;

use crate::math;

/// Dense embedding matrix addressed by canonical key.
///
/// Rows are kept in insertion order, which is also the tie-break order of
/// nearest-neighbour results. Norms are precomputed at build time.
pub struct InMemoryVectorStore {
    keys: Vec<String>,
    index: HashMap<String, usize>,
    data: Vec<f32>,
    norms: Vec<f64>,
    dimensions: usize,
}

impl InMemoryVectorStore {
    /// Build a store from `(key, vector)` pairs.
    pub fn from_pairs<K, I>(pairs: I) -> Result<Self, VectorStoreError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Vec<f32>)>,
    {
        let mut builder = VectorStoreBuilder::new();
        for (key, vector) in pairs {
            builder.insert(key, &vector)?;
        }
        builder.build()
    }

    fn row(&self, idx: usize) -> &[f32] {
        let start = idx * self.dimensions;
        &self.data[start..start + self.dimensions]
    }

    /// Score every row against `query` and return the best `top_n`,
    /// skipping the row `exclude` if given.
    fn rank(&self, query: &[f64], top_n: usize, exclude: Option<usize>) -> Vec<ScoredConcept> {
        if top_n == 0 || query.len() != self.dimensions {
            return Vec::new();
        }
        let query_norm = math::query_norm(query);
        if query_norm == 0.0 || !query_norm.is_finite() {
            return Vec::new();
        }

        // par_iter + collect keeps row order, and sort_by is stable, so equal
        // scores stay in store order.
        let mut scored: Vec<(usize, f64)> = (0..self.keys.len())
            .into_par_iter()
            .filter(|idx| Some(*idx) != exclude)
            .map(|idx| {
                let row_norm = self.norms[idx];
                let score = if row_norm == 0.0 {
                    0.0
                } else {
                    math::query_dot(query, self.row(idx)) / (query_norm * row_norm)
                };
                (idx, score)
            })
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(top_n);

        scored
            .into_iter()
            .map(|(idx, score)| ScoredConcept::new(self.keys[idx].clone(), score))
            .collect()
    }
}

impl IVectorStore for InMemoryVectorStore {
    fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    fn vector(&self, key: &str) -> Option<&[f32]> {
        self.index.get(key).map(|idx| self.row(*idx))
    }

    fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        let ia = *self.index.get(a)?;
        let ib = *self.index.get(b)?;
        let (na, nb) = (self.norms[ia], self.norms[ib]);
        if na == 0.0 || nb == 0.0 {
            return Some(0.0);
        }
        Some(math::dot(self.row(ia), self.row(ib)) / (na * nb))
    }

    fn nearest_neighbors(&self, key: &str, top_n: usize) -> Vec<ScoredConcept> {
        let Some(&idx) = self.index.get(key) else {
            return Vec::new();
        };
        debug!(key, top_n, "nearest neighbour scan");
        let query: Vec<f64> = self.row(idx).iter().map(|x| f64::from(*x)).collect();
        self.rank(&query, top_n, Some(idx))
    }

    fn nearest_to_vector(&self, query: &[f64], top_n: usize) -> Vec<ScoredConcept> {
        self.rank(query, top_n, None)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.keys.iter().map(String::as_str))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}

/// Incremental builder. The first inserted vector fixes the dimensionality
/// unless it was set up front.
#[derive(Default)]
pub struct VectorStoreBuilder {
    dimensions: Option<usize>,
    keys: Vec<String>,
    index: HashMap<String, usize>,
    data: Vec<f32>,
}

impl VectorStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the dimensionality before the first insert.
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            dimensions: Some(dimensions),
            ..Self::default()
        }
    }

    /// Add a vector. Rejects duplicate keys and dimension mismatches.
    pub fn insert(&mut self, key: impl Into<String>, vector: &[f32]) -> Result<(), VectorStoreError> {
        let key = key.into();
        if vector.is_empty() {
            return Err(VectorStoreError::DimensionMismatch {
                key,
                expected: self.dimensions.unwrap_or(0),
                actual: 0,
            });
        }
        let expected = *self.dimensions.get_or_insert(vector.len());
        if vector.len() != expected {
            return Err(VectorStoreError::DimensionMismatch {
                key,
                expected,
                actual: vector.len(),
            });
        }
        if self.index.contains_key(&key) {
            return Err(VectorStoreError::DuplicateKey { key });
        }
        self.index.insert(key.clone(), self.keys.len());
        self.keys.push(key);
        self.data.extend_from_slice(vector);
        Ok(())
    }

    /// Number of vectors inserted so far.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Freeze into a store. An empty builder is an error.
    pub fn build(self) -> Result<InMemoryVectorStore, VectorStoreError> {
        let Some(dimensions) = self.dimensions.filter(|_| !self.keys.is_empty()) else {
            return Err(VectorStoreError::Empty);
        };
        let norms = self.data.par_chunks(dimensions).map(math::norm).collect();
        Ok(InMemoryVectorStore {
            keys: self.keys,
            index: self.index,
            data: self.data,
            norms,
            dimensions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> InMemoryVectorStore {
        InMemoryVectorStore::from_pairs([
            ("car", vec![1.0, 0.0]),
            ("truck", vec![0.9, 0.1]),
            ("banana", vec![0.0, 1.0]),
        ])
        .unwrap()
    }

    #[test]
    fn contains_and_vector() {
        let store = toy();
        assert!(store.contains("car"));
        assert!(!store.contains("Car"));
        assert_eq!(store.vector("banana"), Some(&[0.0f32, 1.0][..]));
        assert_eq!(store.dimensions(), 2);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn similarity_matches_math() {
        let store = toy();
        let sim = store.similarity("car", "truck").unwrap();
        assert!((sim - math::cosine_similarity(&[1.0, 0.0], &[0.9, 0.1])).abs() < 1e-12);
        assert!(store.similarity("car", "plane").is_none());
    }

    #[test]
    fn nearest_excludes_query_key() {
        let store = toy();
        let result = store.nearest_neighbors("car", 1);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].concept, "truck");
    }

    #[test]
    fn nearest_of_unknown_key_is_empty() {
        assert!(toy().nearest_neighbors("plane", 3).is_empty());
    }

    #[test]
    fn top_n_larger_than_store() {
        let result = toy().nearest_neighbors("car", 50);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn ties_keep_store_order() {
        let store = InMemoryVectorStore::from_pairs([
            ("q", vec![1.0, 0.0]),
            ("b", vec![2.0, 0.0]),
            ("a", vec![3.0, 0.0]),
        ])
        .unwrap();
        let result = store.nearest_neighbors("q", 2);
        assert_eq!(result[0].concept, "b");
        assert_eq!(result[1].concept, "a");
    }

    #[test]
    fn nearest_to_vector_excludes_nothing() {
        let result = toy().nearest_to_vector(&[1.0, 0.0], 3);
        assert_eq!(result[0].concept, "car");
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn nearest_to_wrong_dimension_is_empty() {
        assert!(toy().nearest_to_vector(&[1.0, 0.0, 0.0], 3).is_empty());
    }

    #[test]
    fn non_finite_query_matches_nothing() {
        let store = toy();
        assert!(store.nearest_to_vector(&[f64::INFINITY, 0.0], 3).is_empty());
        assert!(store.nearest_to_vector(&[f64::NAN, 1.0], 3).is_empty());
        assert!(store.nearest_to_vector(&[0.0, 0.0], 3).is_empty());
    }

    #[test]
    fn large_query_scores_stay_in_range() {
        let store = InMemoryVectorStore::from_pairs([
            ("a", vec![3.0e38, 3.0e38]),
            ("b", vec![-3.0e38, 1.0]),
            ("c", vec![0.0, 1.0]),
        ])
        .unwrap();
        let result = store.nearest_to_vector(&[9.0e38, 3.0e38], 3);
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|c| (-1.0..=1.0).contains(&c.score)));
        assert_eq!(result[0].concept, "a");
    }

    #[test]
    fn positions_follow_insertion() {
        let store = toy();
        assert_eq!(store.position("car"), Some(0));
        assert_eq!(store.position("banana"), Some(2));
        assert_eq!(store.position("plane"), None);
    }

    #[test]
    fn builder_rejects_duplicates() {
        let mut builder = VectorStoreBuilder::new();
        builder.insert("a", &[1.0]).unwrap();
        let err = builder.insert("a", &[2.0]).unwrap_err();
        assert!(matches!(err, VectorStoreError::DuplicateKey { .. }));
    }

    #[test]
    fn builder_rejects_dimension_mismatch() {
        let mut builder = VectorStoreBuilder::with_dimensions(3);
        let err = builder.insert("a", &[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            VectorStoreError::DimensionMismatch {
                expected: 3,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn empty_builder_fails() {
        assert!(matches!(
            VectorStoreBuilder::new().build(),
            Err(VectorStoreError::Empty)
        ));
    }

    #[test]
    fn zero_vector_scores_zero() {
        let store =
            InMemoryVectorStore::from_pairs([("zero", vec![0.0, 0.0]), ("x", vec![1.0, 0.0])])
                .unwrap();
        assert_eq!(store.similarity("zero", "x"), Some(0.0));
        assert!(store.nearest_neighbors("zero", 5).is_empty());
    }
}
