mod cache_key;
mod ingest_stats;
mod keyed_vector;
mod resolution;
mod scored_concept;
mod service_descriptor;

pub use cache_key::CacheKey;
pub use ingest_stats::IngestStats;
pub use keyed_vector::KeyedVector;
pub use resolution::{Resolution, ResolutionPath};
pub use scored_concept::{ClosestConcepts, ScoredConcept};
pub use service_descriptor::{normalize_for_search, ServiceDescriptor};
