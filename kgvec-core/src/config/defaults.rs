// Single source of truth for all default values.

// --- Cache ---
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 0; // 0 = unbounded
pub const DEFAULT_CACHE_TTL_SECS: u64 = 0; // 0 = entries never expire

// --- Queries ---
pub const DEFAULT_TOP_N: usize = 10;

// --- Services ---
pub const DEFAULT_SERVICE_ENABLED: bool = true;
pub const DEFAULT_DATASET_VERSION: &str = "";
pub const DEFAULT_MODEL: &str = "rdf2vec";
pub const DEFAULT_MODEL_VERSION: &str = "v1";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
