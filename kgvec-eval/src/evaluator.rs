use chrono::{DateTime, Utc};
use kgvec_query::QueryEngine;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::gold::GoldPair;
use crate::spearman::spearman_rho;

/// How gold pairs are fed to the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalOptions {
    /// Pass the gold standard's POS tags as linker hints.
    pub use_pos: bool,
    /// Evaluate noun–noun pairs only.
    pub nouns_only: bool,
}

/// Outcome of one evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReport {
    pub service: String,
    /// `None` when fewer than two pairs could be evaluated.
    pub rho: Option<f64>,
    pub evaluated: usize,
    /// Pairs the engine could not link.
    pub skipped: usize,
    /// Pairs left out by `nouns_only`.
    pub filtered: usize,
    pub evaluated_at: DateTime<Utc>,
}

/// Correlates an engine's similarities with human judgements.
pub struct Evaluator;

impl Evaluator {
    pub fn evaluate(engine: &QueryEngine, pairs: &[GoldPair], options: EvalOptions) -> EvalReport {
        let mut predicted = Vec::with_capacity(pairs.len());
        let mut expected = Vec::with_capacity(pairs.len());
        let (mut skipped, mut filtered) = (0, 0);

        for pair in pairs {
            if options.nouns_only && !pair.is_noun_pair() {
                filtered += 1;
                continue;
            }
            let (pos1, pos2) = if options.use_pos {
                (pair.pos1.as_deref(), pair.pos2.as_deref())
            } else {
                (None, None)
            };
            match engine.get_similarity(&pair.word1, &pair.word2, pos1, pos2) {
                Some(similarity) => {
                    predicted.push(similarity);
                    expected.push(pair.score);
                }
                None => {
                    debug!(word1 = %pair.word1, word2 = %pair.word2, "pair not found");
                    skipped += 1;
                }
            }
        }

        let report = EvalReport {
            service: engine.name().to_string(),
            rho: spearman_rho(&predicted, &expected),
            evaluated: predicted.len(),
            skipped,
            filtered,
            evaluated_at: Utc::now(),
        };
        info!(
            service = %report.service,
            rho = ?report.rho,
            evaluated = report.evaluated,
            skipped = report.skipped,
            "evaluation finished"
        );
        report
    }
}
