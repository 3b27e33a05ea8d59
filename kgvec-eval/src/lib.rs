//! # kgvec-eval
//!
//! Measures how well a query service's similarities agree with human
//! judgements: WordSim-353, SimLex-999, and MEN loaders, Spearman's ρ on
//! average ranks, and an evaluator that skips pairs the service cannot link.

pub mod errors;
pub mod evaluator;
pub mod gold;
pub mod spearman;

pub use errors::EvalError;
pub use evaluator::{EvalOptions, EvalReport, Evaluator};
pub use gold::{GoldPair, GoldStandard};
pub use spearman::spearman_rho;
