use serde::{Deserialize, Serialize};

use super::defaults;

/// Closest-concept result cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum cached queries. 0 keeps every result for the process lifetime.
    pub max_entries: u64,
    /// Time-to-live per entry in seconds. 0 disables expiry.
    pub ttl_secs: u64,
}

impl CacheConfig {
    /// Whether this config asks for the unbounded, never-evicting cache.
    pub fn is_unbounded(&self) -> bool {
        self.max_entries == 0 && self.ttl_secs == 0
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: defaults::DEFAULT_CACHE_MAX_ENTRIES,
            ttl_secs: defaults::DEFAULT_CACHE_TTL_SECS,
        }
    }
}
