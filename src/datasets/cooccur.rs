//! Word co-occurrence table
//!
//! Consecutive token pairs within each document, counted by period.
//! Pairs never span document boundaries. Feeds the word-network
//! analysis downstream.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::corpus::{Period, SentimentRow};

/// One row of the co-occurrence table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CooccurrenceRow {
    pub period: Period,
    pub word_a: String,
    pub word_b: String,
    pub count: u64,
}

/// Count consecutive (word_a, word_b) pairs by period, excluding pairs
/// where either side is a stop word.
///
/// Adjacency is defined on `token_id` order within a document, so the
/// input may arrive in any row order. Output order is deterministic:
/// period, then descending count, then (word_a, word_b).
pub fn cooccurrence(rows: &[SentimentRow], stop_words: &HashSet<String>) -> Vec<CooccurrenceRow> {
    // Regroup the flat token stream by document.
    let mut documents: HashMap<u32, Vec<&SentimentRow>> = HashMap::new();
    for row in rows {
        documents.entry(row.address_id).or_default().push(row);
    }

    let mut counts: HashMap<(Period, String, String), u64> = HashMap::new();
    for tokens in documents.values_mut() {
        tokens.sort_by_key(|r| r.token_id);

        for pair in tokens.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if stop_words.contains(&a.token) || stop_words.contains(&b.token) {
                continue;
            }
            *counts
                .entry((a.period, a.token.clone(), b.token.clone()))
                .or_insert(0) += 1;
        }
    }

    let mut table: Vec<CooccurrenceRow> = counts
        .into_iter()
        .map(|((period, word_a, word_b), count)| CooccurrenceRow {
            period,
            word_a,
            word_b,
            count,
        })
        .collect();

    table.sort_by(|a, b| {
        a.period
            .as_str()
            .cmp(b.period.as_str())
            .then(b.count.cmp(&a.count))
            .then(a.word_a.cmp(&b.word_a))
            .then(a.word_b.cmp(&b.word_b))
    });

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u32, token_id: u32, token: &str, period: Period) -> SentimentRow {
        SentimentRow {
            address_id: id,
            address_year: 1998,
            president: "p".to_string(),
            party: "d".to_string(),
            period,
            token: token.to_string(),
            token_id,
            sentiment: None,
        }
    }

    #[test]
    fn test_consecutive_pairs_counted() {
        let rows = vec![
            row(1, 1, "strong", Period::Pre),
            row(1, 2, "economy", Period::Pre),
            row(1, 3, "strong", Period::Pre),
            row(1, 4, "economy", Period::Pre),
        ];
        let table = cooccurrence(&rows, &HashSet::new());

        let pair = table
            .iter()
            .find(|r| r.word_a == "strong" && r.word_b == "economy")
            .unwrap();
        assert_eq!(pair.count, 2);
    }

    #[test]
    fn test_pairs_never_span_documents() {
        let rows = vec![
            row(1, 1, "strong", Period::Pre),
            row(2, 1, "economy", Period::Pre),
        ];
        let table = cooccurrence(&rows, &HashSet::new());
        assert!(table.is_empty());
    }

    #[test]
    fn test_adjacency_follows_token_id_not_row_order() {
        // Rows shuffled relative to token_id.
        let rows = vec![
            row(1, 3, "jobs", Period::Pre),
            row(1, 1, "million", Period::Pre),
            row(1, 2, "new", Period::Pre),
        ];
        let table = cooccurrence(&rows, &HashSet::new());

        assert!(table.iter().any(|r| r.word_a == "million" && r.word_b == "new"));
        assert!(table.iter().any(|r| r.word_a == "new" && r.word_b == "jobs"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_stop_word_pairs_excluded() {
        let stop_words = crate::datasets::default_stop_words();
        let rows = vec![
            row(1, 1, "the", Period::Pre),
            row(1, 2, "economy", Period::Pre),
            row(1, 3, "grows", Period::Pre),
        ];
        let table = cooccurrence(&rows, &stop_words);

        assert_eq!(table.len(), 1);
        assert_eq!(table[0].word_a, "economy");
        assert_eq!(table[0].word_b, "grows");
    }
}
