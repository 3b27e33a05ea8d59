use serde::{Deserialize, Serialize};

/// A vector together with the canonical key it is stored under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyedVector {
    pub uri: String,
    pub vector: Vec<f32>,
}
