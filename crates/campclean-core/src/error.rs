// crates/campclean-core/src/error.rs

use thiserror::Error;

use campclean_parser::IngestError;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Ingestion failed: {0}")]
    Ingest(#[from] IngestError),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars operation failed: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("cannot compose last_contact_date from month {month:?} and day {day:?}: not a valid calendar date")]
    MalformedDate { month: String, day: String },

    #[error("Data processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
