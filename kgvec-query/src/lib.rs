//! # kgvec-query
//!
//! Query layer over a linked vector store.
//!
//! ```text
//! ServiceConfig ──► bootstrap ──► QueryEngine ──► response (JSON)
//!                                   │   ├── Linker (kgvec-linker)
//!                                   │   ├── IVectorStore (kgvec-vectors)
//!                                   │   └── IResultCache (cache)
//! KgConfig ──► ServiceRegistry ─────┘
//! ```

pub mod bootstrap;
pub mod cache;
pub mod engine;
pub mod registry;
pub mod response;

pub use bootstrap::{build_engine, load_service};
pub use cache::{cache_from_config, BoundedResultCache, UnboundedResultCache};
pub use engine::{EngineStats, QueryEngine};
pub use registry::{ServiceEntry, ServiceRegistry, ServiceSlot};
