pub mod cache_config;
pub mod defaults;
pub mod observability_config;
pub mod service_config;
pub mod source_config;

pub use cache_config::CacheConfig;
pub use observability_config::ObservabilityConfig;
pub use service_config::ServiceConfig;
pub use source_config::{KnowledgeSource, RewriteRule, SensePolicy, SourceConfig};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KgConfig {
    pub cache: CacheConfig,
    pub observability: ObservabilityConfig,
    pub services: Vec<ServiceConfig>,
}

impl KgConfig {
    /// Load config from a TOML string. Missing fields use defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// Load config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }
}
