//! # kgvec-core
//!
//! Foundation crate for the kgvec query services.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{KgConfig, SourceConfig};
pub use errors::{KgError, KgResult};
pub use models::{CacheKey, ClosestConcepts, KeyedVector, Resolution, ResolutionPath, ScoredConcept};
pub use traits::{IResultCache, IVectorStore};
