mod config_error;
mod ingest_error;
mod kg_error;
mod vector_store_error;

pub use config_error::ConfigError;
pub use ingest_error::IngestError;
pub use kg_error::{KgError, KgResult};
pub use vector_store_error::VectorStoreError;
