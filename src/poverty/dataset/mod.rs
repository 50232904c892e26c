//! Location dataset import: CSV exports from the regional survey tooling and
//! JSON payloads in the dashboard's own shape. Importing feeds the engine;
//! the scoring path itself never performs I/O.

mod parser;

use std::io::Read;
use std::path::Path;

use tracing::info;

use super::domain::LocationRecord;

#[derive(Debug, thiserror::Error)]
pub enum DatasetImportError {
    #[error("failed to read location dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid location CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid location JSON data: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct LocationDatasetImporter;

impl LocationDatasetImporter {
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Vec<LocationRecord>, DatasetImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<LocationRecord>, DatasetImportError> {
        let records = parser::parse_csv(reader)?;
        info!(locations = records.len(), "imported location dataset from CSV");
        Ok(records)
    }

    /// Parse a JSON array of location objects, using the same lenient key
    /// resolution as the engine's own deserializer.
    pub fn from_json_str(payload: &str) -> Result<Vec<LocationRecord>, DatasetImportError> {
        let records: Vec<LocationRecord> = serde_json::from_str(payload)?;
        info!(locations = records.len(), "imported location dataset from JSON");
        Ok(records)
    }
}
