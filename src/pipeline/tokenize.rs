//! Tokenizer
//!
//! Expands each document into one row per word token. Word boundaries
//! follow Unicode segmentation (UAX-29), which splits on whitespace and
//! punctuation while keeping internal apostrophes and numeric grouping
//! intact. Tokens are case-folded; every non-text metadata column is
//! replicated onto each token row; `token_id` numbers tokens 1..=K
//! within their document in left-to-right order.

use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::corpus::{AnalysisRecord, TokenRow};

static NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\d,.]+$").unwrap());

/// Word-level tokenizer for address text.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    /// Case-fold tokens. On by default; the lexicon is lowercase.
    lowercase: bool,
    /// Drop purely numeric tokens ("1,000", "1998"). Off by default so
    /// tokenization stays a pure function of the text.
    drop_numeric: bool,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self {
            lowercase: true,
            drop_numeric: false,
        }
    }
}

impl WordTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable case folding.
    pub fn lowercase(mut self, enable: bool) -> Self {
        self.lowercase = enable;
        self
    }

    /// Enable/disable numeric-token dropping.
    pub fn drop_numeric(mut self, enable: bool) -> Self {
        self.drop_numeric = enable;
        self
    }

    /// Tokenize one text into its word sequence.
    ///
    /// Deterministic and pure: the same text always yields the same
    /// sequence. Empty or whitespace-only text yields an empty sequence.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .filter(|word| !(self.drop_numeric && NUMERIC_RE.is_match(word)))
            .map(|word| {
                if self.lowercase {
                    word.to_lowercase()
                } else {
                    word.to_string()
                }
            })
            .collect()
    }

    /// Expand documents into token rows.
    ///
    /// Output cardinality is the sum of per-document token counts. A
    /// document with no tokens contributes zero rows; its `address_id`
    /// then has no presence in the token table, which is valid --
    /// consumers must not assume universe coverage of all ids.
    pub fn expand(&self, records: Vec<AnalysisRecord>) -> Vec<TokenRow> {
        let mut rows = Vec::new();

        for record in records {
            for (position, token) in self.tokenize(&record.text).into_iter().enumerate() {
                rows.push(TokenRow {
                    address_id: record.address_id,
                    address_year: record.address_year,
                    president: record.president.clone(),
                    party: record.party.clone(),
                    period: record.period,
                    token,
                    token_id: (position + 1) as u32,
                });
            }
        }

        tracing::info!(token_rows = rows.len(), "corpus tokenized");
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Period;

    fn record(id: u32, text: &str) -> AnalysisRecord {
        AnalysisRecord {
            address_id: id,
            address_year: 1998,
            president: "William J. Clinton".to_string(),
            party: "Democratic".to_string(),
            period: Period::Pre,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize("The economy is strong");

        assert_eq!(tokens, vec!["the", "economy", "is", "strong"]);
    }

    #[test]
    fn test_punctuation_is_stripped() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize("Tonight, we gather -- once again.");

        assert_eq!(tokens, vec!["tonight", "we", "gather", "once", "again"]);
    }

    #[test]
    fn test_internal_apostrophes_kept() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize("America's promise isn't finished");

        assert_eq!(tokens, vec!["america's", "promise", "isn't", "finished"]);
    }

    #[test]
    fn test_drop_numeric_option() {
        let kept = WordTokenizer::new().tokenize("In 1998 we created 1,000 jobs");
        assert!(kept.contains(&"1998".to_string()));

        let dropped = WordTokenizer::new()
            .drop_numeric(true)
            .tokenize("In 1998 we created 1,000 jobs");
        assert_eq!(dropped, vec!["in", "we", "created", "jobs"]);
    }

    #[test]
    fn test_empty_text_yields_no_rows() {
        let tokenizer = WordTokenizer::new();

        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   \n\t ").is_empty());

        let rows = tokenizer.expand(vec![record(7, "")]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_token_ids_dense_per_document() {
        let tokenizer = WordTokenizer::new();
        let rows = tokenizer.expand(vec![
            record(1, "The economy is strong"),
            record(2, "We face new threats"),
        ]);

        assert_eq!(rows.len(), 8);

        let doc1: Vec<u32> = rows
            .iter()
            .filter(|r| r.address_id == 1)
            .map(|r| r.token_id)
            .collect();
        let doc2: Vec<u32> = rows
            .iter()
            .filter(|r| r.address_id == 2)
            .map(|r| r.token_id)
            .collect();
        assert_eq!(doc1, vec![1, 2, 3, 4]);
        assert_eq!(doc2, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_metadata_replicated_on_every_row() {
        let tokenizer = WordTokenizer::new();
        let rows = tokenizer.expand(vec![record(1, "The economy is strong")]);

        for row in &rows {
            assert_eq!(row.address_id, 1);
            assert_eq!(row.address_year, 1998);
            assert_eq!(row.president, "William J. Clinton");
            assert_eq!(row.party, "Democratic");
            assert_eq!(row.period, Period::Pre);
        }
    }

    #[test]
    fn test_round_trip_matches_direct_tokenization() {
        let tokenizer = WordTokenizer::new();
        let text = "We will build, and we will prosper!";

        let mut rows = tokenizer.expand(vec![record(3, text)]);
        rows.sort_by_key(|r| r.token_id);
        let from_rows: Vec<String> = rows.into_iter().map(|r| r.token).collect();

        assert_eq!(from_rows, tokenizer.tokenize(text));
    }
}
