//! Sentiment lexicon
//!
//! External word -> sentiment-class mapping, loaded once per run and
//! passed by reference into the join stage. Not every English word is
//! present; lookups miss far more often than they hit, and that is the
//! expected shape of the data.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::error::PipelineError;

/// One lexicon entry as stored in the source CSV.
#[derive(Debug, Clone, Deserialize)]
struct LexiconRecord {
    word: String,
    sentiment: String,
}

/// Static word -> sentiment-class mapping.
///
/// Duplicate words in the source are de-duplicated at load time keeping
/// the first occurrence, so the downstream join is deterministic.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    entries: HashMap<String, String>,
    duplicates: usize,
}

impl SentimentLexicon {
    /// Load a lexicon from a CSV file with `word,sentiment` columns.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let file = File::open(path.as_ref()).map_err(|e| {
            PipelineError::LexiconLoad(format!("{}: {e}", path.as_ref().display()))
        })?;
        Self::from_reader(file)
    }

    /// Load a lexicon from any reader.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, PipelineError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| PipelineError::LexiconLoad(e.to_string()))?;
        for required in ["word", "sentiment"] {
            if !headers.iter().any(|h| h == required) {
                return Err(PipelineError::LexiconLoad(format!(
                    "required column `{required}` missing"
                )));
            }
        }

        let mut entries = HashMap::new();
        let mut duplicates = 0;
        for record in csv_reader.deserialize() {
            let record: LexiconRecord =
                record.map_err(|e| PipelineError::LexiconLoad(e.to_string()))?;
            // First occurrence wins
            if entries.contains_key(&record.word) {
                duplicates += 1;
            } else {
                entries.insert(record.word, record.sentiment);
            }
        }

        if duplicates > 0 {
            tracing::warn!(duplicates, "lexicon contained duplicate words; kept first occurrence");
        }
        tracing::info!(words = entries.len(), "sentiment lexicon loaded");

        Ok(Self { entries, duplicates })
    }

    /// Build a lexicon from in-memory pairs (synthetic lexicons in tests).
    pub fn from_entries<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut entries = HashMap::new();
        let mut duplicates = 0;
        for (word, sentiment) in pairs {
            let word = word.into();
            if entries.contains_key(&word) {
                duplicates += 1;
            } else {
                entries.insert(word, sentiment.into());
            }
        }
        Self { entries, duplicates }
    }

    /// Look up the sentiment class for a word (exact string match).
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of distinct words in the lexicon.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of duplicate source rows discarded at load time.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }
}
