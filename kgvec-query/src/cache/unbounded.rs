use dashmap::DashMap;
use kgvec_core::models::{CacheKey, ClosestConcepts};
use kgvec_core::traits::IResultCache;

/// Never-evicting result cache.
///
/// The vector store is immutable, so results stay valid forever. A miss is
/// computed without holding any shard lock. Concurrent misses on one key may
/// both compute; the first stored result wins and every caller gets it.
#[derive(Default)]
pub struct UnboundedResultCache {
    entries: DashMap<CacheKey, ClosestConcepts>,
}

impl UnboundedResultCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IResultCache for UnboundedResultCache {
    fn get(&self, key: &CacheKey) -> Option<ClosestConcepts> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn put(&self, key: CacheKey, result: ClosestConcepts) {
        self.entries.insert(key, result);
    }

    fn get_or_insert_with(
        &self,
        key: CacheKey,
        compute: &dyn Fn() -> ClosestConcepts,
    ) -> (ClosestConcepts, bool) {
        if let Some(hit) = self.get(&key) {
            return (hit, true);
        }
        let computed = compute();
        let stored = self.entries.entry(key).or_insert(computed).value().clone();
        (stored, false)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
