//! Temporal annotator
//!
//! Derives `address_year` from each document's date and assigns the
//! two-valued `period` label against the configured cutoff. Adds two
//! columns, drops zero rows: output row count always equals input.

use chrono::{Datelike, NaiveDate};

use crate::corpus::{Address, AnnotatedAddress, Period};
use crate::error::PipelineError;

/// Date formats accepted in the source table. ISO-8601 first; the
/// US-locale form appears in older corpus exports.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Parse a source date string into a calendar date.
fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value.trim(), fmt).ok())
}

/// Annotate every address with `address_year` and `period`.
///
/// Fails fast on the first unparseable date: the offending row index and
/// raw value are reported and no partially-annotated table is produced.
pub fn annotate(
    addresses: Vec<Address>,
    cutoff_year: i32,
) -> Result<Vec<AnnotatedAddress>, PipelineError> {
    let mut annotated = Vec::with_capacity(addresses.len());

    for (row, address) in addresses.into_iter().enumerate() {
        let date = parse_date(&address.date).ok_or(PipelineError::MalformedDate {
            row,
            value: address.date.clone(),
        })?;

        let address_year = date.year();
        annotated.push(AnnotatedAddress {
            date,
            address_year,
            period: Period::classify(address_year, cutoff_year),
            text: address.text,
            president: address.president,
            party: address.party,
            delivery: address.delivery,
        });
    }

    Ok(annotated)
}
