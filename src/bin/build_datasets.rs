//! Build the analysis-ready datasets from a corpus CSV and a sentiment
//! lexicon CSV.
//!
//! ```bash
//! build_datasets <addresses.csv> <lexicon.csv> <out_dir>
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use rostrum::{AddressLoader, CorpusPipeline, DatasetWriter, PipelineConfig, SentimentLexicon};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        bail!("usage: {} <addresses.csv> <lexicon.csv> <out_dir>", args[0]);
    }
    let corpus_path = PathBuf::from(&args[1]);
    let lexicon_path = PathBuf::from(&args[2]);
    let out_dir = PathBuf::from(&args[3]);

    let config = PipelineConfig::with_lexicon(&lexicon_path);

    let corpus = AddressLoader::load(&corpus_path)
        .with_context(|| format!("loading corpus from {}", corpus_path.display()))?;
    let lexicon = SentimentLexicon::load(&config.lexicon_source)?;

    let output = CorpusPipeline::new(config).run(corpus, &lexicon)?;

    DatasetWriter::new(&out_dir)
        .write_all(&output.tokens, &output.term_frequency, &output.cooccurrence)
        .with_context(|| format!("writing datasets to {}", out_dir.display()))?;

    println!(
        "{} documents -> {} in population -> {} token rows ({} matched the lexicon)",
        output.stats.documents_loaded,
        output.stats.population,
        output.stats.token_rows,
        output.stats.matched_tokens,
    );
    println!("datasets written to {}", out_dir.display());

    Ok(())
}
