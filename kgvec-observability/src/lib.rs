//! # kgvec-observability
//!
//! Structured tracing for the query services: subscriber setup driven by
//! `KGVEC_LOG` or the `[observability]` config section, one event helper per
//! notable query outcome, and span macros for the hot operations.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};
