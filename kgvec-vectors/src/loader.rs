//! word2vec text format loader.
//!
//! Layout: an optional `<count> <dimensions>` header line, then one
//! `<key> <v1> ... <vD>` line per vector. Blank lines are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use kgvec_core::errors::VectorStoreError;
use tracing::{info, warn};

use crate::store::{InMemoryVectorStore, VectorStoreBuilder};

/// Load a vector file from disk.
pub fn load_word2vec_text(path: impl AsRef<Path>) -> Result<InMemoryVectorStore, VectorStoreError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| VectorStoreError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let store = read_word2vec_text(BufReader::new(file))?;
    info!(
        path = %path.display(),
        vectors = kgvec_core::IVectorStore::len(&store),
        dims = kgvec_core::IVectorStore::dimensions(&store),
        "vector store loaded"
    );
    Ok(store)
}

/// Parse vectors from any buffered reader.
pub fn read_word2vec_text<R: BufRead>(reader: R) -> Result<InMemoryVectorStore, VectorStoreError> {
    let mut builder: Option<VectorStoreBuilder> = None;
    let mut declared_count: Option<usize> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| VectorStoreError::Io {
            path: "<reader>".to_string(),
            reason: e.to_string(),
        })?;
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let Some(key) = tokens.next() else {
            continue;
        };
        let rest: Vec<&str> = tokens.collect();

        if builder.is_none() {
            if let Some((count, dims)) = parse_header(key, &rest) {
                if dims == 0 {
                    return Err(VectorStoreError::MalformedHeader {
                        header: line.to_string(),
                    });
                }
                declared_count = Some(count);
                builder = Some(VectorStoreBuilder::with_dimensions(dims));
                continue;
            }
        }

        let vector = rest
            .iter()
            .map(|t| match t.parse::<f32>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(VectorStoreError::MalformedLine {
                    line: line_no,
                    reason: format!("invalid component {t:?}"),
                }),
            })
            .collect::<Result<Vec<f32>, _>>()?;

        if vector.is_empty() {
            return Err(VectorStoreError::MalformedLine {
                line: line_no,
                reason: format!("no components for key {key:?}"),
            });
        }

        builder
            .get_or_insert_with(VectorStoreBuilder::new)
            .insert(key, &vector)?;
    }

    let builder = builder.ok_or(VectorStoreError::Empty)?;
    if let Some(declared) = declared_count {
        if declared != builder.len() {
            warn!(
                declared,
                actual = builder.len(),
                "vector count differs from header"
            );
        }
    }
    builder.build()
}

/// `<count> <dims>`, both unsigned integers.
fn parse_header(first: &str, rest: &[&str]) -> Option<(usize, usize)> {
    if rest.len() != 1 {
        return None;
    }
    let count = first.parse::<usize>().ok()?;
    let dims = rest[0].parse::<usize>().ok()?;
    Some((count, dims))
}
