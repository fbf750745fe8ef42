//! Pipeline error types
//!
//! Every failure surfaces to the caller; nothing is swallowed or
//! defaulted. The pipeline either produces complete output tables or
//! fails before writing any file.

use thiserror::Error;

/// Errors raised by the corpus pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required input column is missing from the corpus file.
    /// Fatal; raised before any transformation runs.
    #[error("required column `{0}` missing from corpus file")]
    Schema(String),

    /// A row's date could not be parsed into a calendar date.
    /// Policy: fail fast and abort the run (no placeholder years).
    #[error("row {row}: cannot parse date `{value}`")]
    MalformedDate { row: usize, value: String },

    /// The population filter reduced the corpus to zero rows.
    #[error("population filter produced zero rows (min_year={min_year}, modality=`{modality}`)")]
    EmptyPopulation { min_year: i32, modality: String },

    /// The external sentiment lexicon is unavailable or malformed.
    /// Fatal for the join stage; the pre-join token table can still be
    /// built via `CorpusPipeline::build_token_table`.
    #[error("failed to load sentiment lexicon: {0}")]
    LexiconLoad(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
