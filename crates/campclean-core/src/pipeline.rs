//! End-to-end orchestration: Reader -> Merger -> Mapper(x3) -> Writer(x3).
//! Single-threaded, strictly forward dataflow, fail-fast. Partial outputs
//! from an aborted run are not cleaned up; the next run overwrites them.

use std::path::Path;

use campclean_parser::archive;
use tracing::info;

use crate::error::Result;
use crate::mapper;
use crate::merge;
use crate::schema::OUTPUT_SCHEMAS;
use crate::writer;

/// Default directories from the original dataset layout.
pub const DEFAULT_INPUT_DIR: &str = "files/input";
pub const DEFAULT_OUTPUT_DIR: &str = "files/output";

pub fn run(input_dir: &Path, output_dir: &Path) -> Result<()> {
    let frames = archive::read_input_dir(input_dir)?;
    info!(
        tables = frames.len(),
        dir = %input_dir.display(),
        "decoded input tables"
    );

    let merged = merge::merge_frames(frames)?;
    info!(
        rows = merged.height(),
        columns = merged.width(),
        "merged dataset"
    );

    for schema in &OUTPUT_SCHEMAS {
        let output = mapper::project(&merged, schema)?;
        let path = output_dir.join(format!("{}.csv", schema.name));
        writer::write_frame(&output, &path)?;
        info!(
            entity = schema.name,
            rows = output.height(),
            path = %path.display(),
            "wrote output"
        );
    }
    Ok(())
}

/// Zero-argument entry point over the fixed `files/` layout.
pub fn run_default() -> Result<()> {
    run(
        Path::new(DEFAULT_INPUT_DIR),
        Path::new(DEFAULT_OUTPUT_DIR),
    )
}
