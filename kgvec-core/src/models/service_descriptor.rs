use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a query service: which dataset, embedded with which model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub dataset: String,
    pub dataset_version: String,
    pub model: String,
    pub model_version: String,
}

impl ServiceDescriptor {
    pub fn new(dataset: &str, dataset_version: &str, model: &str, model_version: &str) -> Self {
        Self {
            dataset: dataset.to_string(),
            dataset_version: dataset_version.to_string(),
            model: model.to_string(),
            model_version: model_version.to_string(),
        }
    }

    /// Whether this descriptor matches the given criteria after
    /// [`normalize_for_search`] is applied to both sides.
    pub fn matches(&self, dataset: &str, dataset_version: &str, model: &str, model_version: &str) -> bool {
        normalize_for_search(&self.dataset) == normalize_for_search(dataset)
            && normalize_for_search(&self.dataset_version) == normalize_for_search(dataset_version)
            && normalize_for_search(&self.model) == normalize_for_search(model)
            && normalize_for_search(&self.model_version) == normalize_for_search(model_version)
    }
}

impl fmt::Display for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.dataset, self.dataset_version, self.model, self.model_version
        )
    }
}

/// Lower-case and drop `-`, `_` and spaces, so `"DBpedia"`, `"db-pedia"` and
/// `"DB pedia"` all find the same service.
pub fn normalize_for_search(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
