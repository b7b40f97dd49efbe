//! Record loading for the seismic event dashboard

pub mod config;
pub mod parse;
pub mod record;
pub mod sources;

use tokio::task::JoinError;
use thiserror::Error;

use qd_core::RecordId;

// Re-exports
pub use config::{NullConfig, SourceConfig};
pub use parse::parse_dataset;
pub use record::{FieldValue, Record};
pub use sources::{source_for_location, FileSource, HttpSource, RecordSource};

/// Errors that can occur while loading records
#[derive(Error, Debug)]
pub enum DataError {
    /// The resource was reached but did not answer with a success status
    #[error("HTTP error! status: {status} (while fetching '{location}')")]
    Transport { status: u16, location: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(String),

    #[error("Join error: {0}")]
    Join(#[from] JoinError),
}

impl From<csv::Error> for DataError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => DataError::Io(std::io::Error::new(io_err.kind(), error.to_string())),
            _ => DataError::Csv(error.to_string()),
        }
    }
}

/// One loaded batch of records.
///
/// Created once per successful load and shared read-only between views.
#[derive(Debug, Clone)]
pub struct Dataset {
    source_name: String,
    /// Display columns in header order, without the identifier
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(source_name: impl Into<String>, columns: Vec<String>, records: Vec<Record>) -> Self {
        Self {
            source_name: source_name.into(),
            columns,
            records,
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by identifier
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        let index = (id.0 as usize).checked_sub(1)?;
        self.records.get(index).filter(|record| record.id == id)
    }
}
