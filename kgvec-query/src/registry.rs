use std::sync::Arc;

use chrono::{DateTime, Utc};
use kgvec_core::config::KgConfig;
use kgvec_core::errors::{KgError, KgResult};
use kgvec_core::models::ServiceDescriptor;
use kgvec_observability::events;
use tracing::info;

use crate::bootstrap::load_service;
use crate::cache::cache_from_config;
use crate::engine::QueryEngine;

/// State of a configured service.
#[derive(Clone)]
pub enum ServiceSlot {
    Ready(Arc<QueryEngine>),
    /// Disabled, or failed to load.
    Unavailable { reason: String },
}

impl ServiceSlot {
    pub fn engine(&self) -> Option<&Arc<QueryEngine>> {
        match self {
            Self::Ready(engine) => Some(engine),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// A registered service and when it was registered.
#[derive(Clone)]
pub struct ServiceEntry {
    pub descriptor: ServiceDescriptor,
    pub slot: ServiceSlot,
    pub registered_at: DateTime<Utc>,
}

/// Every configured service, looked up by a loosely matched descriptor.
#[derive(Clone, Default)]
pub struct ServiceRegistry {
    entries: Vec<ServiceEntry>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every service in `config`. A service that fails to load is
    /// registered as unavailable and the rest still come up.
    pub fn from_config(config: &KgConfig) -> Self {
        let mut registry = Self::new();
        for service in &config.services {
            let descriptor = service.descriptor();
            let slot = if !service.enabled {
                ServiceSlot::Unavailable {
                    reason: "disabled".to_string(),
                }
            } else {
                match load_service(service, cache_from_config(&config.cache)) {
                    Ok(engine) => ServiceSlot::Ready(Arc::new(engine)),
                    Err(err) => {
                        events::service_unavailable(&descriptor.to_string(), &err.to_string());
                        ServiceSlot::Unavailable {
                            reason: err.to_string(),
                        }
                    }
                }
            };
            registry.register(descriptor, slot);
        }
        info!(
            services = registry.len(),
            ready = registry.ready_count(),
            "service registry initialized"
        );
        registry
    }

    /// Load every enabled service, failing on the first that cannot start.
    pub fn from_config_strict(config: &KgConfig) -> KgResult<Self> {
        let mut registry = Self::new();
        for service in config.services.iter().filter(|s| s.enabled) {
            let descriptor = service.descriptor();
            let engine = load_service(service, cache_from_config(&config.cache))
                .map_err(|err| KgError::startup(descriptor.to_string(), err))?;
            registry.register(descriptor, ServiceSlot::Ready(Arc::new(engine)));
        }
        Ok(registry)
    }

    pub fn register(&mut self, descriptor: ServiceDescriptor, slot: ServiceSlot) {
        self.entries.push(ServiceEntry {
            descriptor,
            slot,
            registered_at: Utc::now(),
        });
    }

    /// The first service matching after folding case and dropping `-`, `_`
    /// and spaces.
    pub fn find(
        &self,
        dataset: &str,
        dataset_version: &str,
        model: &str,
        model_version: &str,
    ) -> Option<&ServiceSlot> {
        self.entries
            .iter()
            .find(|e| e.descriptor.matches(dataset, dataset_version, model, model_version))
            .map(|e| &e.slot)
    }

    /// The engine of a matching, ready service.
    pub fn engine(
        &self,
        dataset: &str,
        dataset_version: &str,
        model: &str,
        model_version: &str,
    ) -> Option<Arc<QueryEngine>> {
        self.find(dataset, dataset_version, model, model_version)?
            .engine()
            .cloned()
    }

    pub fn entries(&self) -> &[ServiceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ready_count(&self) -> usize {
        self.entries.iter().filter(|e| e.slot.is_ready()).count()
    }
}
