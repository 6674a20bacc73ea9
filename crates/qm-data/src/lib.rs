//! Data tables, CSV export and configuration for the qualification model

pub mod config;
pub mod export;
pub mod registry;
pub mod table;

use arrow::error::ArrowError;
use thiserror::Error;

// Re-exports
pub use config::{ConfigError, DashboardConfig};
pub use export::{export_binding, CsvExporter, ExportArtifact, ExportBinding, ExportColumn, CSV_MIME_TYPE};
pub use registry::DatasetRegistry;
pub use table::{CellValue, MetricTable, TableId};

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("Arrow error: {0}")]
    Arrow(ArrowError),
    
    #[error("CSV writing error: {0}")]
    Csv(String),
    
    #[error("Table '{table}' has no field '{field}'")]
    MissingField { table: &'static str, field: String },
    
    #[error("Table '{table}' has no record {row} ({len} records)")]
    RecordOutOfBounds { table: &'static str, row: usize, len: usize },
    
    #[error("Field '{field}' of table '{table}' has unsupported type {data_type}")]
    UnsupportedType { table: &'static str, field: String, data_type: String },
}

impl From<csv::Error> for DataError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => DataError::Io(std::io::Error::new(io_err.kind(), error.to_string())),
            _ => DataError::Csv(error.to_string()),
        }
    }
}

impl From<ArrowError> for DataError {
    fn from(error: ArrowError) -> Self {
        DataError::Arrow(error)
    }
}
