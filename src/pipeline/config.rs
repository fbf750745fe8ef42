//! Configuration types and defaults for the corpus pipeline

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Pipeline configuration.
///
/// The recognized surface is deliberately small: the temporal cutoff,
/// the analysis window's lower bound, the delivery modality to keep,
/// and which sentiment lexicon to load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Year that partitions `period`: addresses dated in this year or
    /// later are "post". Default: 2001
    pub cutoff_year: i32,
    /// Lower bound of the analysis window (inclusive). Default: 1945
    pub min_year: i32,
    /// Delivery modality retained by the population filter.
    /// Default: "spoken"
    pub modality: String,
    /// Path of the sentiment lexicon CSV (`word,sentiment`).
    pub lexicon_source: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            cutoff_year: 2001,
            min_year: 1945,
            modality: "spoken".to_string(),
            lexicon_source: PathBuf::from("data/sentiment_lexicon.csv"),
        }
    }
}

impl PipelineConfig {
    /// Default configuration with an explicit lexicon path.
    pub fn with_lexicon<P: Into<PathBuf>>(lexicon_source: P) -> Self {
        Self {
            lexicon_source: lexicon_source.into(),
            ..Self::default()
        }
    }
}
