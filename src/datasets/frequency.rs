//! Term-frequency table
//!
//! Stopword-filtered token counts grouped by period. Feeds the
//! topic-frequency analysis downstream.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::corpus::{Period, SentimentRow};

/// One row of the term-frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRow {
    pub period: Period,
    pub token: String,
    pub count: u64,
}

/// Count tokens by (period, token), excluding stop words.
///
/// Output order is deterministic: period, then descending count, then
/// token.
pub fn term_frequency(rows: &[SentimentRow], stop_words: &HashSet<String>) -> Vec<FrequencyRow> {
    let mut counts: HashMap<(Period, String), u64> = HashMap::new();

    for row in rows {
        if stop_words.contains(&row.token) {
            continue;
        }
        *counts.entry((row.period, row.token.clone())).or_insert(0) += 1;
    }

    let mut table: Vec<FrequencyRow> = counts
        .into_iter()
        .map(|((period, token), count)| FrequencyRow { period, token, count })
        .collect();

    table.sort_by(|a, b| {
        a.period
            .as_str()
            .cmp(b.period.as_str())
            .then(b.count.cmp(&a.count))
            .then(a.token.cmp(&b.token))
    });

    table
}
