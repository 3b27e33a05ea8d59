use serde::{Deserialize, Serialize};

/// Counters collected while building a term index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestStats {
    /// Keys present in the vector store and indexed.
    pub indexed: usize,
    /// Keys absent from the store but known as a redirect alias (also indexed).
    pub via_redirect: usize,
    /// Keys neither in the store nor redirected. Skipped.
    pub not_found: usize,
    /// Keys already present in their bucket. Skipped.
    pub duplicates: usize,
}

impl IngestStats {
    /// Total number of candidate keys seen.
    pub fn total(&self) -> usize {
        self.indexed + self.via_redirect + self.not_found + self.duplicates
    }
}
