/// kgvec version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Part-of-speech tags understood by the POS-aware linkers.
/// n = noun, v = verb, j = adjective, r = adverb, a = adjective satellite.
pub const VALID_POS_TAGS: [&str; 5] = ["n", "v", "j", "r", "a"];

/// POS used when no hint is given or the hint is not recognised.
pub const DEFAULT_POS: &str = "n";

/// Placeholder substituted with the POS tag inside a tag pattern.
pub const POS_PLACEHOLDER: &str = "{pos}";

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "KGVEC_LOG";

/// Upper bound on `top_n` accepted by nearest-neighbour queries.
pub const MAX_TOP_N: usize = 10_000;
