//! Closest-concept result caches.
//!
//! Two `IResultCache` implementations: an unbounded `DashMap` that keeps
//! every result for the life of the process, and a moka-backed cache with a
//! capacity and optional TTL.

mod bounded;
mod unbounded;

pub use bounded::BoundedResultCache;
pub use unbounded::UnboundedResultCache;

use std::sync::Arc;
use std::time::Duration;

use kgvec_core::config::CacheConfig;
use kgvec_core::traits::IResultCache;

/// Build the cache described by `[cache]`.
pub fn cache_from_config(config: &CacheConfig) -> Arc<dyn IResultCache> {
    if config.is_unbounded() {
        return Arc::new(UnboundedResultCache::new());
    }
    let max_entries = (config.max_entries > 0).then_some(config.max_entries);
    let ttl = (config.ttl_secs > 0).then(|| Duration::from_secs(config.ttl_secs));
    Arc::new(BoundedResultCache::new(max_entries, ttl))
}
