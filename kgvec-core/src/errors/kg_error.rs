use super::{ConfigError, IngestError, VectorStoreError};

/// Top-level error for the kgvec workspace.
///
/// Only startup can fail: an unresolvable concept is never an error, it is
/// reported as `None` or an empty result by the query layer.
#[derive(Debug, thiserror::Error)]
pub enum KgError {
    #[error("vector store error: {0}")]
    VectorStoreError(#[from] VectorStoreError),

    #[error("ingest error: {0}")]
    IngestError(#[from] IngestError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("service {service} failed to start: {reason}")]
    StartupFailure { service: String, reason: String },
}

impl KgError {
    /// Wrap any error raised while bringing up the named service.
    pub fn startup(service: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::StartupFailure {
            service: service.into(),
            reason: err.to_string(),
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type KgResult<T> = Result<T, KgError>;
