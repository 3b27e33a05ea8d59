use serde::{Deserialize, Serialize};

/// How the linker reached a canonical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPath {
    /// Normalized key found in the term index.
    Direct,
    /// Found after upper-casing the first character.
    CaseFlipped,
    /// Index candidate was missing from the store and a redirect was followed.
    Redirected,
    /// Raw surface (or a prefixed form of it) is itself a store key.
    StoreProbe,
}

/// A surface form resolved to one canonical key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub key: String,
    pub path: ResolutionPath,
}

impl Resolution {
    pub fn new(key: impl Into<String>, path: ResolutionPath) -> Self {
        Self {
            key: key.into(),
            path,
        }
    }
}
