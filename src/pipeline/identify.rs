//! Identifier assigner
//!
//! Assigns the dense 1..=N `address_id` over the filtered population.
//!
//! Contract: called exactly once, after every row-count-changing filter
//! and before any row-splitting operation. Ids follow the table's
//! iteration order at assignment time, which the filter stage guarantees
//! to be source order (chronological in the shipped corpus). Reordering
//! upstream changes the assignment; that order dependence is part of the
//! identified-document contract, not an accident.

use crate::corpus::{AnnotatedAddress, IdentifiedAddress};

/// Assign `address_id = i` (1-indexed) to the i-th row.
pub fn assign_ids(addresses: Vec<AnnotatedAddress>) -> Vec<IdentifiedAddress> {
    addresses
        .into_iter()
        .enumerate()
        .map(|(i, a)| IdentifiedAddress {
            address_id: (i + 1) as u32,
            address_year: a.address_year,
            period: a.period,
            text: a.text,
            president: a.president,
            party: a.party,
            delivery: a.delivery,
        })
        .collect()
}
