/// Errors raised while loading or building a vector store.
#[derive(Debug, thiserror::Error)]
pub enum VectorStoreError {
    #[error("failed to read vector file {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("malformed header: {header}")]
    MalformedHeader { header: String },

    #[error("malformed vector line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("dimension mismatch for key {key}: expected {expected}, got {actual}")]
    DimensionMismatch {
        key: String,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate key in vector store: {key}")]
    DuplicateKey { key: String },

    #[error("vector store is empty")]
    Empty,
}
