//! Structured log events for query and startup outcomes.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

/// A query reached a service.
pub fn query_received(service: &str, operation: &str, surface: &str) {
    tracing::debug!(
        event = "query_received",
        service = %service,
        operation = %operation,
        surface = %surface,
        "query received"
    );
}

/// A closest-concept query was answered from the result cache.
pub fn cache_hit(service: &str, cache_key: &str, results: usize) {
    tracing::debug!(
        event = "cache_hit",
        service = %service,
        cache_key = %cache_key,
        results = results,
        "result cache hit"
    );
}

/// A surface form did not resolve to any stored concept.
pub fn concept_unresolved(service: &str, surface: &str) {
    tracing::info!(
        event = "concept_unresolved",
        service = %service,
        surface = %surface,
        "concept not found"
    );
}

/// Term index construction finished.
pub fn ingest_completed(service: &str, indexed: usize, via_redirect: usize, not_found: usize) {
    tracing::info!(
        event = "ingest_completed",
        service = %service,
        indexed = indexed,
        via_redirect = via_redirect,
        not_found = not_found,
        "ingestion completed"
    );
}

/// A configured service could not be brought up and was registered as
/// unavailable.
pub fn service_unavailable(service: &str, reason: &str) {
    tracing::warn!(
        event = "service_unavailable",
        service = %service,
        reason = %reason,
        "service unavailable"
    );
}
