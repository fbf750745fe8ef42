// rostrum/src/corpus/loader.rs
//
// CSV ingestion for the address corpus

use std::fs::File;
use std::path::Path;

use crate::corpus::Address;
use crate::error::PipelineError;

/// Columns the pipeline requires in the source table.
/// Extra columns are permitted and ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = ["date", "text", "president", "party", "delivery"];

/// Loader for the document-level corpus table (one row per address).
pub struct AddressLoader;

impl AddressLoader {
    /// Load the corpus from a CSV file.
    ///
    /// Validates the header before reading any row: a missing required
    /// column aborts with `PipelineError::Schema` and no rows are
    /// produced.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Address>, PipelineError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    /// Load the corpus from any reader (used by tests with in-memory CSV).
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Address>, PipelineError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        Self::validate_headers(csv_reader.headers()?)?;

        let mut addresses = Vec::new();
        for record in csv_reader.deserialize() {
            let address: Address = record?;
            addresses.push(address);
        }

        tracing::info!(rows = addresses.len(), "corpus loaded");
        Ok(addresses)
    }

    /// Check that every required column is present in the header row.
    fn validate_headers(headers: &csv::StringRecord) -> Result<(), PipelineError> {
        for required in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == required) {
                return Err(PipelineError::Schema(required.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
date,text,president,party,delivery,footnote
1998-01-27,The economy is strong,William J. Clinton,Democratic,spoken,extra
2003-01-28,We face new threats,George W. Bush,Republican,spoken,extra
";

    #[test]
    fn test_load_with_extra_columns() {
        let addresses = AddressLoader::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(addresses.len(), 2);
        assert_eq!(addresses[0].president, "William J. Clinton");
        assert_eq!(addresses[1].delivery, "spoken");
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let csv = "date,text,president,party\n1998-01-27,hello,X,Y\n";
        let err = AddressLoader::from_reader(csv.as_bytes()).unwrap_err();

        match err {
            PipelineError::Schema(column) => assert_eq!(column, "delivery"),
            other => panic!("expected Schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let addresses = AddressLoader::load(file.path()).unwrap();
        assert_eq!(addresses.len(), 2);
        assert_eq!(addresses[0].date, "1998-01-27");
    }
}
