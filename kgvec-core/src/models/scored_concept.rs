use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A concept with its cosine similarity to a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredConcept {
    pub concept: String,
    pub score: f64,
}

impl ScoredConcept {
    pub fn new(concept: impl Into<String>, score: f64) -> Self {
        Self {
            concept: concept.into(),
            score,
        }
    }
}

/// Closest-concept result as held by the result cache.
///
/// Shared so a cache hit hands out the stored result without copying it.
/// An empty list is a valid, cached outcome.
pub type ClosestConcepts = Arc<Vec<ScoredConcept>>;
