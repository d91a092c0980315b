use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("no input data found in {}: no .zip archives and no .csv files", .dir.display())]
    NoInputData { dir: PathBuf },

    #[error("{location} is not valid UTF-8 delimited text")]
    Decode {
        location: String,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("glob pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("glob iteration failed: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("ZIP operation failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Polars operation failed: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}
