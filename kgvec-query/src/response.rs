//! JSON payloads returned by the query services.
//!
//! | query          | found                                   | not found |
//! |----------------|-----------------------------------------|-----------|
//! | vector         | `{"uri": …, "vector": […]}`             | `{}`      |
//! | sense vectors  | `{"result": [{"uri", "vector"}, …]}`    | `{}`      |
//! | similarity     | `{"result": 0.42}`                      | `{}`      |
//! | closest        | `{"result": [{"concept", "score"}, …]}` | `{}`      |

use kgvec_core::models::{KeyedVector, ScoredConcept};
use serde::Serialize;
use serde_json::{json, Value};

use crate::engine::QueryEngine;

/// Wrapper for every non-empty response that is not a single vector.
#[derive(Debug, Serialize)]
pub struct ResultEnvelope<T: Serialize> {
    pub result: T,
}

fn not_found() -> Value {
    json!({})
}

fn envelope<T: Serialize>(result: T) -> Value {
    serde_json::to_value(ResultEnvelope { result }).unwrap_or_else(|_| not_found())
}

pub fn vector_json(vector: Option<&KeyedVector>) -> Value {
    match vector {
        Some(v) => serde_json::to_value(v).unwrap_or_else(|_| not_found()),
        None => not_found(),
    }
}

pub fn sense_vectors_json(vectors: &[KeyedVector]) -> Value {
    if vectors.is_empty() {
        not_found()
    } else {
        envelope(vectors)
    }
}

/// Vector query answered the way the engine's source expects: every sense
/// for `multi_sense` sources, a single vector otherwise.
pub fn vector_response(engine: &QueryEngine, surface: &str) -> Value {
    if engine.linker().source().multi_sense {
        sense_vectors_json(&engine.get_sense_vectors(surface))
    } else {
        vector_json(engine.get_vector(surface).as_ref())
    }
}

pub fn similarity_json(similarity: Option<f64>) -> Value {
    match similarity {
        Some(score) => envelope(score),
        None => not_found(),
    }
}

/// Closest concepts. `None` means the query could not be linked.
pub fn closest_json(concepts: Option<&[ScoredConcept]>) -> Value {
    match concepts {
        Some(concepts) => envelope(concepts),
        None => not_found(),
    }
}

/// Error payload for a request naming no loaded service.
pub fn error_json(message: &str) -> Value {
    json!({ "error": message })
}
