//! Population filter
//!
//! Restricts the annotated corpus to the analysis population: addresses
//! from `min_year` on, delivered in the configured modality. Rows pass
//! through unmodified and in their source order; the later column
//! pruning at this same component boundary lives in `prune`.

use crate::corpus::{AnalysisRecord, AnnotatedAddress, IdentifiedAddress};
use crate::error::PipelineError;

/// Apply both population predicates conjunctively.
///
/// Input order is preserved; the identifier assigner depends on that.
/// An empty result is surfaced loudly: downstream analyses assume a
/// non-trivial population, so zero survivors aborts the run.
pub fn filter_population(
    addresses: Vec<AnnotatedAddress>,
    min_year: i32,
    modality: &str,
) -> Result<Vec<AnnotatedAddress>, PipelineError> {
    let input_count = addresses.len();
    let population: Vec<AnnotatedAddress> = addresses
        .into_iter()
        .filter(|a| a.address_year >= min_year && a.delivery == modality)
        .collect();

    tracing::info!(
        input = input_count,
        population = population.len(),
        min_year,
        modality,
        "population filter applied"
    );

    if population.is_empty() {
        return Err(PipelineError::EmptyPopulation {
            min_year,
            modality: modality.to_string(),
        });
    }

    Ok(population)
}

/// Prune to the columns carried into tokenization.
pub fn prune(addresses: Vec<IdentifiedAddress>) -> Vec<AnalysisRecord> {
    addresses
        .into_iter()
        .map(|a| AnalysisRecord {
            address_id: a.address_id,
            address_year: a.address_year,
            president: a.president,
            party: a.party,
            period: a.period,
            text: a.text,
        })
        .collect()
}
