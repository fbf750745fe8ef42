//! Lexicon joiner
//!
//! Left outer join of the token table against the sentiment lexicon.
//! The left side is preserved in full: exactly one output row per input
//! row, regardless of match. Tokens were case-folded upstream, so the
//! case-sensitive exact match here behaves case-insensitively against a
//! lowercase lexicon.

use crate::corpus::{SentimentRow, TokenRow};
use crate::lexicon::SentimentLexicon;

/// Joins token rows to their sentiment class, if any.
pub struct LexiconJoiner<'a> {
    lexicon: &'a SentimentLexicon,
}

impl<'a> LexiconJoiner<'a> {
    pub fn new(lexicon: &'a SentimentLexicon) -> Self {
        Self { lexicon }
    }

    /// Perform the left join. Row count is preserved exactly; the
    /// lexicon was de-duplicated at load time, so no row can fan out.
    pub fn join(&self, tokens: Vec<TokenRow>) -> Vec<SentimentRow> {
        let mut matched = 0usize;
        let rows: Vec<SentimentRow> = tokens
            .into_iter()
            .map(|t| {
                let sentiment = self.lexicon.get(&t.token).map(str::to_string);
                if sentiment.is_some() {
                    matched += 1;
                }
                SentimentRow {
                    address_id: t.address_id,
                    address_year: t.address_year,
                    president: t.president,
                    party: t.party,
                    period: t.period,
                    token: t.token,
                    token_id: t.token_id,
                    sentiment,
                }
            })
            .collect();

        tracing::info!(rows = rows.len(), matched, "lexicon join complete");
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Period;

    fn token(id: u32, token_id: u32, token: &str) -> TokenRow {
        TokenRow {
            address_id: id,
            address_year: 1998,
            president: "p".to_string(),
            party: "d".to_string(),
            period: Period::Pre,
            token: token.to_string(),
            token_id,
        }
    }

    #[test]
    fn test_join_preserves_row_count() {
        let lexicon = SentimentLexicon::from_entries([("strong", "positive")]);
        let joiner = LexiconJoiner::new(&lexicon);

        let tokens = vec![
            token(1, 1, "the"),
            token(1, 2, "economy"),
            token(1, 3, "is"),
            token(1, 4, "strong"),
        ];
        let joined = joiner.join(tokens);

        assert_eq!(joined.len(), 4);
    }

    #[test]
    fn test_miss_is_null_not_error() {
        let lexicon = SentimentLexicon::from_entries([("strong", "positive")]);
        let joiner = LexiconJoiner::new(&lexicon);

        let joined = joiner.join(vec![token(1, 1, "the"), token(1, 2, "strong")]);

        assert_eq!(joined[0].sentiment, None);
        assert_eq!(joined[1].sentiment, Some("positive".to_string()));
    }

    #[test]
    fn test_join_keeps_order_and_ids() {
        let lexicon = SentimentLexicon::from_entries([("threats", "negative")]);
        let joiner = LexiconJoiner::new(&lexicon);

        let joined = joiner.join(vec![token(2, 1, "new"), token(2, 2, "threats")]);

        assert_eq!(joined[0].token_id, 1);
        assert_eq!(joined[1].token_id, 2);
        assert_eq!(joined[1].address_id, 2);
    }

    #[test]
    fn test_empty_token_table_joins_to_empty() {
        let lexicon = SentimentLexicon::from_entries([("strong", "positive")]);
        let joined = LexiconJoiner::new(&lexicon).join(Vec::new());
        assert!(joined.is_empty());
    }
}
