/// Errors raised while reading gold-standard files.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("failed to read gold standard {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("malformed gold standard line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("unknown gold standard {name}")]
    UnknownStandard { name: String },
}
