use std::time::Duration;

use kgvec_core::models::{CacheKey, ClosestConcepts};
use kgvec_core::traits::IResultCache;
use moka::sync::Cache;

/// Result cache with a capacity bound and optional time-to-live.
///
/// TinyLFU admission and eviction via moka. Misses are computed once per
/// key even under contention.
pub struct BoundedResultCache {
    cache: Cache<CacheKey, ClosestConcepts>,
}

impl BoundedResultCache {
    /// `None` for either limit leaves that dimension unbounded.
    pub fn new(max_entries: Option<u64>, ttl: Option<Duration>) -> Self {
        let mut builder = Cache::builder();
        if let Some(max_entries) = max_entries {
            builder = builder.max_capacity(max_entries);
        }
        if let Some(ttl) = ttl {
            builder = builder.time_to_live(ttl);
        }
        Self {
            cache: builder.build(),
        }
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl IResultCache for BoundedResultCache {
    fn get(&self, key: &CacheKey) -> Option<ClosestConcepts> {
        self.cache.get(key)
    }

    fn put(&self, key: CacheKey, result: ClosestConcepts) {
        self.cache.insert(key, result);
    }

    fn get_or_insert_with(
        &self,
        key: CacheKey,
        compute: &dyn Fn() -> ClosestConcepts,
    ) -> (ClosestConcepts, bool) {
        let entry = self.cache.entry(key).or_insert_with(compute);
        let hit = !entry.is_fresh();
        (entry.into_value(), hit)
    }

    fn len(&self) -> usize {
        // entry_count lags behind inserts until pending tasks run.
        self.cache.run_pending_tasks();
        self.cache.entry_count() as usize
    }
}
