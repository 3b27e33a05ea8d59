use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use kgvec_core::KgConfig;
use kgvec_eval::{EvalOptions, Evaluator, GoldStandard};
use kgvec_observability::init_tracing;
use kgvec_query::{cache_from_config, load_service};

/// Correlate a configured service's similarities with a gold standard.
#[derive(Parser, Debug)]
#[command(name = "kgvec-eval")]
#[command(about = "Spearman evaluation of a kgvec service against WordSim-353, SimLex-999 or MEN")]
struct Args {
    /// kgvec TOML configuration.
    #[arg(long)]
    config: PathBuf,

    /// Dataset of the service to evaluate. Case, `-`, `_` and spaces are ignored.
    #[arg(long)]
    dataset: String,

    #[arg(long, default_value = "")]
    dataset_version: String,

    #[arg(long, default_value = "rdf2vec")]
    model: String,

    #[arg(long, default_value = "v1")]
    model_version: String,

    /// wordsim, simlex or men.
    #[arg(long)]
    gold: GoldStandard,

    /// Gold-standard file.
    #[arg(long)]
    gold_file: PathBuf,

    /// Pass the gold standard's POS tags to the linker.
    #[arg(long)]
    use_pos: bool,

    /// Evaluate noun pairs only.
    #[arg(long)]
    nouns_only: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = KgConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    init_tracing(&config.observability);

    let service = config
        .services
        .iter()
        .find(|s| {
            s.descriptor()
                .matches(&args.dataset, &args.dataset_version, &args.model, &args.model_version)
        })
        .with_context(|| format!("no service configured for dataset {}", args.dataset))?;

    let engine = load_service(service, cache_from_config(&config.cache))?;
    let pairs = args
        .gold
        .load(&args.gold_file)
        .with_context(|| format!("loading {}", args.gold_file.display()))?;

    let options = EvalOptions {
        use_pos: args.use_pos,
        nouns_only: args.nouns_only,
    };
    let report = Evaluator::evaluate(&engine, &pairs, options);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
