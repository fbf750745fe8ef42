//! Dataset writer
//!
//! Persists the final tables as CSV. All tables are staged to temporary
//! files and renamed into place only after every write succeeded, so a
//! failing run leaves no partial output behind. Also exposes the final
//! token-table schema for the external data-dictionary utility.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::corpus::SentimentRow;
use crate::datasets::{CooccurrenceRow, FrequencyRow};
use crate::error::PipelineError;

/// Output file names within the output directory.
pub const TOKENS_FILE: &str = "address_tokens.csv";
pub const FREQUENCY_FILE: &str = "term_frequency.csv";
pub const COOCCURRENCE_FILE: &str = "cooccurrence.csv";

/// One column of an output table, as consumed by the data-dictionary
/// generator.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub dtype: &'static str,
    pub description: &'static str,
}

/// Schema of the token-sentiment table.
pub fn token_schema() -> &'static [ColumnSpec] {
    &[
        ColumnSpec {
            name: "address_id",
            dtype: "int",
            description: "dense 1..N document identifier over the filtered population",
        },
        ColumnSpec {
            name: "address_year",
            dtype: "int",
            description: "calendar year the address was delivered",
        },
        ColumnSpec {
            name: "president",
            dtype: "string",
            description: "speaker of the address",
        },
        ColumnSpec {
            name: "party",
            dtype: "string",
            description: "speaker's party affiliation",
        },
        ColumnSpec {
            name: "period",
            dtype: "string",
            description: "temporal partition relative to the cutoff year: pre or post",
        },
        ColumnSpec {
            name: "token",
            dtype: "string",
            description: "lowercase word token",
        },
        ColumnSpec {
            name: "token_id",
            dtype: "int",
            description: "1-based position of the token within its document",
        },
        ColumnSpec {
            name: "sentiment",
            dtype: "string|null",
            description: "lexicon sentiment class; empty when the token has no entry",
        },
    ]
}

/// Machine-readable description of every output table.
pub fn data_dictionary() -> serde_json::Value {
    serde_json::json!({
        "tokens": {
            "file": TOKENS_FILE,
            "columns": token_schema(),
        },
        "term_frequency": {
            "file": FREQUENCY_FILE,
            "columns": ["period", "token", "count"],
        },
        "cooccurrence": {
            "file": COOCCURRENCE_FILE,
            "columns": ["period", "word_a", "word_b", "count"],
        },
    })
}

/// Writes the computed tables into an output directory.
pub struct DatasetWriter {
    out_dir: PathBuf,
}

impl DatasetWriter {
    pub fn new<P: Into<PathBuf>>(out_dir: P) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Write all three tables.
    ///
    /// Each table is serialized to a temporary file first; the renames
    /// into place happen only after every serialization succeeded.
    pub fn write_all(
        &self,
        tokens: &[SentimentRow],
        frequencies: &[FrequencyRow],
        cooccurrences: &[CooccurrenceRow],
    ) -> Result<(), PipelineError> {
        std::fs::create_dir_all(&self.out_dir)?;

        let staged = [
            (self.stage(tokens)?, self.out_dir.join(TOKENS_FILE)),
            (self.stage(frequencies)?, self.out_dir.join(FREQUENCY_FILE)),
            (self.stage(cooccurrences)?, self.out_dir.join(COOCCURRENCE_FILE)),
        ];

        for (tmp, target) in staged {
            tmp.persist(&target).map_err(|e| e.error)?;
            tracing::info!(file = %target.display(), "dataset written");
        }

        Ok(())
    }

    /// Serialize one table into a temporary file in the output directory.
    fn stage<T: Serialize>(
        &self,
        rows: &[T],
    ) -> Result<tempfile::NamedTempFile, PipelineError> {
        let tmp = tempfile::NamedTempFile::new_in(&self.out_dir)?;

        let mut writer = csv::Writer::from_writer(&tmp);
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        drop(writer);

        Ok(tmp)
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}
