use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use kgvec_core::errors::IngestError;
use tracing::{info, warn};

use crate::normalizer::KeyNormalizer;

/// Alias → canonical key mapping, followed at most one hop.
///
/// Parsed from `<alias> <relation> <target> .` triples. Aliases keep the
/// order in which they first appear; a later line for the same alias
/// replaces its target.
#[derive(Debug, Clone, Default)]
pub struct RedirectTable {
    targets: HashMap<String, String>,
    order: Vec<String>,
    malformed: usize,
}

impl RedirectTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from `(alias, target)` pairs. Self-targets are dropped.
    pub fn from_pairs<A, T, I>(pairs: I) -> Self
    where
        A: Into<String>,
        T: Into<String>,
        I: IntoIterator<Item = (A, T)>,
    {
        let mut table = Self::default();
        for (alias, target) in pairs {
            table.insert(alias.into(), target.into());
        }
        table
    }

    /// Parse redirect triples. `rewriter` is applied to both alias and target
    /// after the angle brackets are removed.
    pub fn parse<R: BufRead>(reader: R, rewriter: &KeyNormalizer) -> Result<Self, IngestError> {
        let mut table = Self::default();
        for line in reader.lines() {
            let line = line.map_err(|e| IngestError::Io {
                path: "<reader>".to_string(),
                reason: e.to_string(),
            })?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < 3 {
                table.malformed += 1;
                continue;
            }
            let alias = rewriter.normalize(strip_angles(tokens[0]));
            let target = rewriter.normalize(strip_angles(tokens[2]));
            table.insert(alias, target);
        }
        if table.malformed > 0 {
            warn!(skipped = table.malformed, "malformed redirect lines skipped");
        }
        Ok(table)
    }

    /// Read a redirect file from disk.
    pub fn load(path: impl AsRef<Path>, rewriter: &KeyNormalizer) -> Result<Self, IngestError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| IngestError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let table = Self::parse(BufReader::new(file), rewriter)?;
        info!(path = %path.display(), redirects = table.len(), "redirects loaded");
        Ok(table)
    }

    fn insert(&mut self, alias: String, target: String) {
        if alias.is_empty() || target.is_empty() || alias == target {
            return;
        }
        if !self.targets.contains_key(&alias) {
            self.order.push(alias.clone());
        }
        self.targets.insert(alias, target);
    }

    /// Target of `alias`, one hop.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.targets.get(alias).map(String::as_str)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.targets.contains_key(alias)
    }

    /// Aliases in first-seen order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Lines skipped for having fewer than three tokens.
    pub fn malformed_lines(&self) -> usize {
        self.malformed
    }
}

fn strip_angles(token: &str) -> &str {
    token.trim_start_matches('<').trim_end_matches('>')
}
