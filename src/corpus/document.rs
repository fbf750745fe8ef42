//! Record types for each pipeline boundary
//!
//! One plain struct per stage output. Each stage consumes the exact
//! shape the previous stage produced:
//!
//! `Address` -> `AnnotatedAddress` -> (filter) -> `IdentifiedAddress`
//! -> `AnalysisRecord` -> `TokenRow` -> `SentimentRow`

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Period
// =============================================================================

/// Binary temporal partition of the corpus relative to the cutoff year.
///
/// An address dated in the cutoff year itself is `Post` (inclusive lower
/// bound on the post side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Pre,
    Post,
}

impl Period {
    /// Classify a year against a cutoff: `Pre` iff `year < cutoff`.
    pub fn classify(year: i32, cutoff: i32) -> Self {
        if year < cutoff {
            Period::Pre
        } else {
            Period::Post
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Pre => "pre",
            Period::Post => "post",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Document-level records
// =============================================================================

/// Raw corpus record, one per delivered address.
///
/// Deserialized straight from the source CSV; columns beyond these are
/// ignored. The `date` field stays a string until the temporal annotator
/// parses it, so malformed dates surface as pipeline errors rather than
/// deserialization noise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub date: String,
    pub text: String,
    pub president: String,
    pub party: String,
    pub delivery: String,
}

/// Address with derived temporal columns attached.
#[derive(Debug, Clone)]
pub struct AnnotatedAddress {
    pub date: NaiveDate,
    pub address_year: i32,
    pub period: Period,
    pub text: String,
    pub president: String,
    pub party: String,
    pub delivery: String,
}

/// Annotated address carrying its dense document identifier.
///
/// `address_id` is a bijection onto `1..=N` for the N filtered rows,
/// assigned in iteration order. Stable only within one pipeline run.
#[derive(Debug, Clone)]
pub struct IdentifiedAddress {
    pub address_id: u32,
    pub address_year: i32,
    pub period: Period,
    pub text: String,
    pub president: String,
    pub party: String,
    pub delivery: String,
}

/// Pruned column set carried into tokenization.
///
/// Everything downstream of the filter boundary sees exactly these
/// columns; `delivery` and the raw date have served their purpose.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRecord {
    pub address_id: u32,
    pub address_year: i32,
    pub president: String,
    pub party: String,
    pub period: Period,
    pub text: String,
}

// =============================================================================
// Token-level records
// =============================================================================

/// One row per (document, token) pair.
///
/// All document-level metadata is replicated onto each token row.
/// For a fixed `address_id`, `token_id` values are exactly `1..=K` in
/// left-to-right text order, with no gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRow {
    pub address_id: u32,
    pub address_year: i32,
    pub president: String,
    pub party: String,
    pub period: Period,
    pub token: String,
    pub token_id: u32,
}

/// Token row after the lexicon join.
///
/// `sentiment` is `None` iff the token has no lexicon entry; that is the
/// majority case, not an error. Serializes to an empty CSV field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRow {
    pub address_id: u32,
    pub address_year: i32,
    pub president: String,
    pub party: String,
    pub period: Period,
    pub token: String,
    pub token_id: u32,
    pub sentiment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_classification() {
        assert_eq!(Period::classify(1998, 2001), Period::Pre);
        assert_eq!(Period::classify(2003, 2001), Period::Post);
    }

    #[test]
    fn test_cutoff_year_is_post() {
        assert_eq!(Period::classify(2001, 2001), Period::Post);
    }

    #[test]
    fn test_period_as_str() {
        assert_eq!(Period::Pre.as_str(), "pre");
        assert_eq!(Period::Post.as_str(), "post");
        assert_eq!(Period::Post.to_string(), "post");
    }
}
