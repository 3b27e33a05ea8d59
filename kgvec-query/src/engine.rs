use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use kgvec_core::config::SensePolicy;
use kgvec_core::constants::MAX_TOP_N;
use kgvec_core::models::{CacheKey, ClosestConcepts, KeyedVector, ScoredConcept};
use kgvec_core::traits::{IResultCache, IVectorStore};
use kgvec_linker::Linker;
use kgvec_observability::events;
use kgvec_vectors::math;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Query counters of one engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    pub closest_queries: u64,
    pub cache_hits: u64,
    pub unresolved: u64,
}

#[derive(Default)]
struct Counters {
    closest_queries: AtomicU64,
    cache_hits: AtomicU64,
    unresolved: AtomicU64,
}

/// Answers vector, similarity, and nearest-neighbour queries for one
/// knowledge graph.
///
/// Every operation is total: an input that cannot be linked yields `None`
/// or an empty list, never an error. Safe to share across threads.
pub struct QueryEngine {
    name: String,
    store: Arc<dyn IVectorStore>,
    linker: Linker,
    cache: Arc<dyn IResultCache>,
    counters: Counters,
}

impl QueryEngine {
    pub fn new(
        name: impl Into<String>,
        store: Arc<dyn IVectorStore>,
        linker: Linker,
        cache: Arc<dyn IResultCache>,
    ) -> Self {
        Self {
            name: name.into(),
            store,
            linker,
            cache,
            counters: Counters::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn linker(&self) -> &Linker {
        &self.linker
    }

    pub fn store(&self) -> &dyn IVectorStore {
        self.store.as_ref()
    }

    /// Number of cached closest-concept results.
    pub fn cached_results(&self) -> usize {
        self.cache.len()
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            closest_queries: self.counters.closest_queries.load(Ordering::Relaxed),
            cache_hits: self.counters.cache_hits.load(Ordering::Relaxed),
            unresolved: self.counters.unresolved.load(Ordering::Relaxed),
        }
    }

    /// The vector of the concept `surface` links to.
    pub fn get_vector(&self, surface: &str) -> Option<KeyedVector> {
        events::query_received(&self.name, "vector", surface);
        let resolution = self.linker.resolve(surface, None);
        let vector = resolution.and_then(|r| self.keyed_vector(r.key));
        if vector.is_none() {
            events::concept_unresolved(&self.name, surface);
        }
        vector
    }

    /// Vectors of every sense `surface` links to, in index order.
    pub fn get_sense_vectors(&self, surface: &str) -> Vec<KeyedVector> {
        events::query_received(&self.name, "sense_vectors", surface);
        let vectors: Vec<KeyedVector> = self
            .linker
            .resolve_senses(surface, None)
            .into_iter()
            .filter_map(|key| self.keyed_vector(key))
            .collect();
        if vectors.is_empty() {
            events::concept_unresolved(&self.name, surface);
        }
        vectors
    }

    /// Cosine similarity of two surface forms.
    ///
    /// With `SensePolicy::TieBreak` each side is linked to one key; with
    /// `SensePolicy::Average` the mean over every sense pair is returned.
    pub fn get_similarity(
        &self,
        a: &str,
        b: &str,
        pos_a: Option<&str>,
        pos_b: Option<&str>,
    ) -> Option<f64> {
        let span = kgvec_observability::similarity_span!(self.name, a, b);
        let _guard = span.enter();

        match self.linker.source().sense_policy {
            SensePolicy::TieBreak => {
                let key_a = self.linker.resolve(a, pos_a)?.key;
                let key_b = self.linker.resolve(b, pos_b)?.key;
                self.store.similarity(&key_a, &key_b)
            }
            SensePolicy::Average => {
                let senses_a = self.linker.resolve_senses(a, pos_a);
                let senses_b = self.linker.resolve_senses(b, pos_b);
                let scores: Vec<f64> = senses_a
                    .iter()
                    .flat_map(|sa| senses_b.iter().map(move |sb| (sa, sb)))
                    .filter_map(|(sa, sb)| self.store.similarity(sa, sb))
                    .collect();
                if scores.is_empty() {
                    return None;
                }
                Some(scores.iter().sum::<f64>() / scores.len() as f64)
            }
        }
    }

    /// The `top_n` concepts closest to `surface`, best first.
    ///
    /// Results, including the empty result of an unresolved query, are
    /// cached by normalized key and `top_n`; a hit never touches the store.
    pub fn find_closest(&self, surface: &str, top_n: usize) -> ClosestConcepts {
        let top_n = top_n.min(MAX_TOP_N);
        let span = kgvec_observability::closest_span!(self.name, surface, top_n);
        let _guard = span.enter();
        self.counters.closest_queries.fetch_add(1, Ordering::Relaxed);

        let key = CacheKey::new(self.linker.normalize(surface), top_n);
        let display_key = key.to_string();
        let (result, hit) = self
            .cache
            .get_or_insert_with(key, &|| Arc::new(self.compute_closest(surface, top_n)));

        if hit {
            self.counters.cache_hits.fetch_add(1, Ordering::Relaxed);
            events::cache_hit(&self.name, &display_key, result.len());
        }
        result
    }

    /// Concepts closest to `vector(c) + vector(a) - vector(b_negative)`,
    /// e.g. `analogy("king", "man", "woman")`. Inputs are not filtered from
    /// the result.
    pub fn analogy(
        &self,
        a: &str,
        b_negative: &str,
        c: &str,
        top_n: usize,
    ) -> Option<Vec<ScoredConcept>> {
        let va = self.resolved_vector(a)?;
        let vb = self.resolved_vector(b_negative)?;
        let vc = self.resolved_vector(c)?;
        let query = math::linear_combination(&[vc, va], &[vb]);
        Some(self.store.nearest_to_vector(&query, top_n.min(MAX_TOP_N)))
    }

    /// Concepts closest to `vector(a) + vector(b)`.
    pub fn most_similar_addition(&self, a: &str, b: &str, top_n: usize) -> Option<Vec<ScoredConcept>> {
        let va = self.resolved_vector(a)?;
        let vb = self.resolved_vector(b)?;
        let query = math::linear_combination(&[va, vb], &[]);
        Some(self.store.nearest_to_vector(&query, top_n.min(MAX_TOP_N)))
    }

    fn compute_closest(&self, surface: &str, top_n: usize) -> Vec<ScoredConcept> {
        let result = if self.linker.source().multi_sense {
            let senses = self.linker.resolve_senses(surface, None);
            if senses.is_empty() {
                None
            } else {
                Some(self.merge_sense_neighbours(&senses, top_n))
            }
        } else {
            self.linker
                .resolve(surface, None)
                .map(|r| self.store.nearest_neighbors(&r.key, top_n))
        };

        result.unwrap_or_else(|| {
            self.counters.unresolved.fetch_add(1, Ordering::Relaxed);
            events::concept_unresolved(&self.name, surface);
            Vec::new()
        })
    }

    /// Neighbours of every sense, merged by best score. The senses
    /// themselves are left out.
    fn merge_sense_neighbours(&self, senses: &[String], top_n: usize) -> Vec<ScoredConcept> {
        // Ask for extra rows so dropping the other senses cannot leave the
        // result short.
        let fetch = top_n.saturating_add(senses.len());
        let mut best: HashMap<String, usize> = HashMap::new();
        let mut merged: Vec<ScoredConcept> = Vec::new();

        for sense in senses {
            for candidate in self.store.nearest_neighbors(sense, fetch) {
                if senses.contains(&candidate.concept) {
                    continue;
                }
                match best.get(&candidate.concept) {
                    Some(&idx) => {
                        if candidate.score > merged[idx].score {
                            merged[idx].score = candidate.score;
                        }
                    }
                    None => {
                        best.insert(candidate.concept.clone(), merged.len());
                        merged.push(candidate);
                    }
                }
            }
        }

        // equal scores fall back to store order, as in a single-sense scan
        let position = |c: &ScoredConcept| self.store.position(&c.concept).unwrap_or(usize::MAX);
        merged.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| position(a).cmp(&position(b)))
        });
        merged.truncate(top_n);
        debug!(senses = senses.len(), results = merged.len(), "sense neighbours merged");
        merged
    }

    fn resolved_vector(&self, surface: &str) -> Option<&[f32]> {
        let key = self.linker.resolve(surface, None)?.key;
        self.store.vector(&key)
    }

    fn keyed_vector(&self, key: String) -> Option<KeyedVector> {
        let vector = self.store.vector(&key)?.to_vec();
        Some(KeyedVector { uri: key, vector })
    }
}
