/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {reason}")]
    Parse { reason: String },

    #[error("invalid rewrite pattern {pattern}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("missing field {field} in service {service}")]
    MissingField { service: String, field: String },

    #[error("failed to read config file {path}: {reason}")]
    Io { path: String, reason: String },
}
