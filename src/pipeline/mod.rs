//! The corpus pipeline
//!
//! Single linear flow, one module per stage:
//!
//! load -> annotate (temporal) -> filter (population) -> identify
//! -> prune -> tokenize -> join (lexicon) -> write
//!
//! `CorpusPipeline` wires the stages together and surfaces the row
//! counts each boundary produced; the stage functions stay free-standing
//! so each one is independently testable.

pub mod config;
pub mod filter;
pub mod identify;
pub mod join;
pub mod temporal;
pub mod tokenize;
pub mod writer;

pub use config::*;
pub use filter::*;
pub use identify::*;
pub use join::*;
pub use temporal::*;
pub use tokenize::*;
pub use writer::*;

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::corpus::{Address, SentimentRow, TokenRow};
use crate::datasets::{cooccurrence, default_stop_words, term_frequency, CooccurrenceRow, FrequencyRow};
use crate::error::PipelineError;
use crate::lexicon::SentimentLexicon;

// =============================================================================
// Stats and output
// =============================================================================

/// Row counts observed at each pipeline boundary.
///
/// Downstream validation depends on these being visible, not buried in
/// log output, so the pipeline returns them alongside the tables.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineStats {
    /// Rows in the source table.
    pub documents_loaded: usize,
    /// Rows surviving the population filter (= N, the id range).
    pub population: usize,
    /// Rows in the token table.
    pub token_rows: usize,
    /// Token rows that matched a lexicon entry.
    pub matched_tokens: usize,
    /// Distinct words in the loaded lexicon.
    pub lexicon_words: usize,
    /// Duplicate lexicon rows discarded at load time.
    pub lexicon_duplicates: usize,
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub tokens: Vec<SentimentRow>,
    pub term_frequency: Vec<FrequencyRow>,
    pub cooccurrence: Vec<CooccurrenceRow>,
    pub stats: PipelineStats,
}

// =============================================================================
// CorpusPipeline
// =============================================================================

/// Pipeline orchestrator.
pub struct CorpusPipeline {
    config: PipelineConfig,
    tokenizer: WordTokenizer,
}

impl CorpusPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            tokenizer: WordTokenizer::default(),
        }
    }

    /// Replace the default tokenizer (e.g. to drop numeric tokens).
    pub fn with_tokenizer(mut self, tokenizer: WordTokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Build the pre-join token table (stages 2-5).
    ///
    /// Public on its own so the token table stays producible for
    /// diagnostics when the lexicon is unavailable.
    pub fn build_token_table(
        &self,
        addresses: Vec<Address>,
    ) -> Result<Vec<TokenRow>, PipelineError> {
        let (rows, _population) = self.token_stages(addresses)?;
        Ok(rows)
    }

    /// Full run: token table, lexicon join, derived tables, stats.
    ///
    /// Performs no file I/O; writing is the caller's step, taken only
    /// once this returns Ok.
    pub fn run(
        &self,
        addresses: Vec<Address>,
        lexicon: &SentimentLexicon,
    ) -> Result<PipelineOutput, PipelineError> {
        let documents_loaded = addresses.len();
        let (token_rows, population) = self.token_stages(addresses)?;
        let token_count = token_rows.len();

        let tokens = LexiconJoiner::new(lexicon).join(token_rows);
        debug_assert_eq!(tokens.len(), token_count);
        let matched_tokens = tokens.iter().filter(|t| t.sentiment.is_some()).count();

        let stop_words = default_stop_words();
        let term_frequency = term_frequency(&tokens, &stop_words);
        let cooccurrence = cooccurrence(&tokens, &stop_words);

        let stats = PipelineStats {
            documents_loaded,
            population,
            token_rows: token_count,
            matched_tokens,
            lexicon_words: lexicon.len(),
            lexicon_duplicates: lexicon.duplicates(),
        };
        tracing::info!(?stats, "pipeline run complete");

        Ok(PipelineOutput {
            tokens,
            term_frequency,
            cooccurrence,
            stats,
        })
    }

    /// Stages 2-5: annotate, filter, identify, prune, tokenize.
    fn token_stages(
        &self,
        addresses: Vec<Address>,
    ) -> Result<(Vec<TokenRow>, usize), PipelineError> {
        let annotated = temporal::annotate(addresses, self.config.cutoff_year)?;
        let population =
            filter::filter_population(annotated, self.config.min_year, &self.config.modality)?;
        let population_count = population.len();

        let identified = identify::assign_ids(population);
        let records = filter::prune(identified);
        let rows = self.tokenizer.expand(records);

        Ok((rows, population_count))
    }
}
