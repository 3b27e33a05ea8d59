//! Service startup: vector store → redirects → term index → linker → engine.

use std::sync::Arc;

use kgvec_core::config::{ServiceConfig, SourceConfig};
use kgvec_core::errors::KgResult;
use kgvec_core::traits::{IResultCache, IVectorStore};
use kgvec_linker::{read_entity_file, Linker, RedirectTable};
use kgvec_observability::events;
use kgvec_vectors::load_word2vec_text;
use tracing::info;

use crate::engine::QueryEngine;

/// Load every file a service needs and assemble its engine.
///
/// Any I/O or configuration failure aborts the whole service.
pub fn load_service(config: &ServiceConfig, cache: Arc<dyn IResultCache>) -> KgResult<QueryEngine> {
    config.validate()?;
    let name = config.descriptor().to_string();
    let span = kgvec_observability::ingest_span!(name);
    let _guard = span.enter();

    let store: Arc<dyn IVectorStore> = Arc::new(load_word2vec_text(&config.vector_file)?);
    let source = config.resolved_source();
    let redirects = Linker::load_redirects(&source, config.redirect_file.as_deref())?;
    let entities = config
        .entity_file
        .as_deref()
        .map(read_entity_file)
        .transpose()?;

    build_engine(name, store, source, redirects, entities.as_deref(), cache)
}

/// Assemble an engine from an already loaded store.
///
/// Without `entities` the term index covers the store vocabulary plus every
/// redirect alias.
pub fn build_engine(
    name: impl Into<String>,
    store: Arc<dyn IVectorStore>,
    source: SourceConfig,
    redirects: RedirectTable,
    entities: Option<&[String]>,
    cache: Arc<dyn IResultCache>,
) -> KgResult<QueryEngine> {
    let name = name.into();
    let (linker, stats) = Linker::from_source(source, store.clone(), Arc::new(redirects), entities)?;
    events::ingest_completed(&name, stats.indexed, stats.via_redirect, stats.not_found);
    info!(
        service = %name,
        vectors = store.len(),
        dimensions = store.dimensions(),
        buckets = linker.index().len(),
        "service ready"
    );
    Ok(QueryEngine::new(name, store, linker, cache))
}
