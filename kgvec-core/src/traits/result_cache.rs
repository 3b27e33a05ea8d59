use crate::models::{CacheKey, ClosestConcepts};

/// Cache of closest-concept results.
///
/// The vector store never changes after load, so a cached result never goes
/// stale; implementations decide only whether entries are ever evicted.
/// Must be safe for concurrent reads and inserts.
pub trait IResultCache: Send + Sync {
    /// Cached result for `key`, if any.
    fn get(&self, key: &CacheKey) -> Option<ClosestConcepts>;

    /// Store a result. An existing entry is replaced.
    fn put(&self, key: CacheKey, result: ClosestConcepts);

    /// Return the cached result or compute, store and return it.
    ///
    /// The flag is `true` on a cache hit. The default implementation may
    /// compute the same key twice under contention; last writer wins, which
    /// is harmless because the computation is deterministic.
    fn get_or_insert_with(
        &self,
        key: CacheKey,
        compute: &dyn Fn() -> ClosestConcepts,
    ) -> (ClosestConcepts, bool) {
        if let Some(hit) = self.get(&key) {
            return (hit, true);
        }
        let result = compute();
        self.put(key, result.clone());
        (result, false)
    }

    /// Number of cached entries.
    fn len(&self) -> usize;

    /// Whether the cache is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
