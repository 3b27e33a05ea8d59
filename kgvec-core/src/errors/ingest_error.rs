/// Errors raised while reading entity and redirect corpora.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read {path}: {reason}")]
    Io { path: String, reason: String },
}
