use std::fmt;

use serde::{Deserialize, Serialize};

/// Key of a cached closest-concept query.
///
/// Built from the normalized query key, not from the resolved concept, so
/// an unresolved query is cached too. `top_n` is part of the key so a hit
/// never returns more than the requested number of neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub normalized: String,
    pub top_n: usize,
}

impl CacheKey {
    pub fn new(normalized: impl Into<String>, top_n: usize) -> Self {
        Self {
            normalized: normalized.into(),
            top_n,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.normalized, self.top_n)
    }
}
