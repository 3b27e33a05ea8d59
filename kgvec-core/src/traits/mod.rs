mod result_cache;
mod vector_store;

pub use result_cache::IResultCache;
pub use vector_store::IVectorStore;
