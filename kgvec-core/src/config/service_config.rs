use serde::{Deserialize, Serialize};

use super::defaults;
use super::source_config::{KnowledgeSource, SourceConfig};
use crate::errors::ConfigError;
use crate::models::ServiceDescriptor;

/// One query service: which vectors to load and how to link into them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub dataset: String,
    pub dataset_version: String,
    pub model: String,
    pub model_version: String,
    /// Vector file in word2vec text format.
    pub vector_file: String,
    /// Newline-delimited entity list. Without it the store vocabulary is indexed.
    pub entity_file: Option<String>,
    /// Turtle-like redirect triples.
    pub redirect_file: Option<String>,
    /// Preset used when `source_config` is absent.
    pub source: KnowledgeSource,
    /// Explicit source behaviour, overriding the preset.
    pub source_config: Option<SourceConfig>,
    /// Disabled services are registered as unavailable and never loaded.
    pub enabled: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            dataset: String::new(),
            dataset_version: defaults::DEFAULT_DATASET_VERSION.to_string(),
            model: defaults::DEFAULT_MODEL.to_string(),
            model_version: defaults::DEFAULT_MODEL_VERSION.to_string(),
            vector_file: String::new(),
            entity_file: None,
            redirect_file: None,
            source: KnowledgeSource::default(),
            source_config: None,
            enabled: defaults::DEFAULT_SERVICE_ENABLED,
        }
    }
}

impl ServiceConfig {
    /// The source config in effect: the explicit one, else the preset.
    pub fn resolved_source(&self) -> SourceConfig {
        self.source_config
            .clone()
            .unwrap_or_else(|| self.source.preset())
    }

    /// Registry descriptor of this service.
    pub fn descriptor(&self) -> ServiceDescriptor {
        ServiceDescriptor {
            dataset: self.dataset.clone(),
            dataset_version: self.dataset_version.clone(),
            model: self.model.clone(),
            model_version: self.model_version.clone(),
        }
    }

    /// Check the fields bootstrap cannot do without.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dataset.trim().is_empty() {
            return Err(ConfigError::MissingField {
                service: self.descriptor().to_string(),
                field: "dataset".to_string(),
            });
        }
        if self.vector_file.trim().is_empty() {
            return Err(ConfigError::MissingField {
                service: self.descriptor().to_string(),
                field: "vector_file".to_string(),
            });
        }
        Ok(())
    }
}
