use crate::models::ScoredConcept;

/// Read-only embedding space: canonical key → dense vector.
///
/// Loaded once at startup and never mutated afterwards, so every method
/// takes `&self` and implementations are shared across request handlers
/// without locking.
pub trait IVectorStore: Send + Sync {
    /// Whether the key has a vector.
    fn contains(&self, key: &str) -> bool;

    /// The vector stored under `key`.
    fn vector(&self, key: &str) -> Option<&[f32]>;

    /// Cosine similarity of two stored vectors. `None` if either key is absent.
    fn similarity(&self, a: &str, b: &str) -> Option<f64>;

    /// The `top_n` keys closest to `key` by cosine similarity, descending,
    /// ties in store order. The key itself is never part of the result.
    fn nearest_neighbors(&self, key: &str, top_n: usize) -> Vec<ScoredConcept>;

    /// The `top_n` keys closest to an arbitrary query vector. Nothing is
    /// excluded. A query with a non-finite or zero norm matches nothing.
    fn nearest_to_vector(&self, query: &[f64], top_n: usize) -> Vec<ScoredConcept>;

    /// Row of `key` in store order.
    fn position(&self, key: &str) -> Option<usize>;

    /// Vocabulary in store order.
    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Dimensionality shared by every vector.
    fn dimensions(&self) -> usize;

    /// Number of stored vectors.
    fn len(&self) -> usize;

    /// Whether the store holds no vectors.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
