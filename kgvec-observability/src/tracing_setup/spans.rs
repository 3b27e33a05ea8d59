//! Span definitions per operation: closest-concept search, similarity, ingestion.

/// Create a closest-concept span.
#[macro_export]
macro_rules! closest_span {
    ($service:expr, $surface:expr, $top_n:expr) => {
        tracing::info_span!("kgvec.closest", service = %$service, surface = %$surface, top_n = $top_n)
    };
}

/// Create a similarity span.
#[macro_export]
macro_rules! similarity_span {
    ($service:expr, $a:expr, $b:expr) => {
        tracing::debug_span!("kgvec.similarity", service = %$service, a = %$a, b = %$b)
    };
}

/// Create an ingestion span.
#[macro_export]
macro_rules! ingest_span {
    ($service:expr) => {
        tracing::info_span!("kgvec.ingest", service = %$service)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CLOSEST: &str = "kgvec.closest";
    pub const SIMILARITY: &str = "kgvec.similarity";
    pub const INGEST: &str = "kgvec.ingest";
}
