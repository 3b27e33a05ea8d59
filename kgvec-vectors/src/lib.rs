//! # kgvec-vectors
//!
//! The vector store behind every query service: an immutable, row-major
//! `f32` matrix indexed by canonical key, with cosine similarity and
//! brute-force top-k search parallelised over rayon.
//!
//! ## Architecture
//!
//! ```text
//! word2vec text file ──► loader ──► VectorStoreBuilder ──► InMemoryVectorStore
//!                                                          ├── similarity (cosine)
//!                                                          ├── nearest_neighbors (key)
//!                                                          └── nearest_to_vector (expression)
//! ```

pub mod loader;
pub mod math;
pub mod store;

pub use loader::{load_word2vec_text, read_word2vec_text};
pub use store::{InMemoryVectorStore, VectorStoreBuilder};
