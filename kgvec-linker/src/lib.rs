//! # kgvec-linker
//!
//! Maps user text onto the canonical keys of a vector store.
//!
//! ```text
//! surface ──► KeyNormalizer ──► TermIndex bucket ──► POS tie-break ──► candidate
//!                                    │ miss                               │ not in store
//!                                    ▼                                    ▼
//!                             case-flip retry                      RedirectTable (1 hop)
//! ```
//!
//! Everything here is immutable once built and shared across query threads.

pub mod linker;
pub mod normalizer;
pub mod pos;
pub mod redirects;
pub mod term_index;

pub use linker::Linker;
pub use normalizer::KeyNormalizer;
pub use pos::PosTagger;
pub use redirects::RedirectTable;
pub use term_index::{read_entities, read_entity_file, TermIndex};
