use std::fs;
use std::path::Path;

use polars::prelude::*;

use crate::error::Result;

/// Writes one frame as headered CSV: exact column names in frame order, one
/// data row per record, no index column, default quoting. Null cells
/// serialize as empty fields. The destination directory is created if absent
/// and an existing file at `path` is overwritten, so re-runs are idempotent.
pub fn write_frame(frame: &DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = fs::File::create(path)?;
    let mut out = frame.clone();
    CsvWriter::new(file).include_header(true).finish(&mut out)?;
    Ok(())
}
