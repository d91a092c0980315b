use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use tracing::debug;
use zip::ZipArchive;

use crate::decode::decode_csv;
use crate::errors::IngestError;

/// Extension marker for compressed input containers.
const ARCHIVE_EXTENSION: &str = "zip";
/// Suffix marking delimited-text archive members.
const MEMBER_SUFFIX: &str = ".csv";

/// Reads every table available under `dir`: all `.csv` members of all `.zip`
/// archives, decoded in archive/member enumeration order. When the archives
/// yield nothing (none present, or none containing delimited members), falls
/// back to bare `.csv` files in the same directory. Zero tables either way is
/// fatal.
pub fn read_input_dir(dir: &Path) -> Result<Vec<DataFrame>, IngestError> {
    let mut frames = Vec::new();
    for path in list_files(dir, ARCHIVE_EXTENSION)? {
        frames.extend(read_archive(&path)?);
    }

    if frames.is_empty() {
        for path in list_files(dir, "csv")? {
            let bytes = fs::read(&path)?;
            let text = std::str::from_utf8(&bytes).map_err(|source| IngestError::Decode {
                location: path.display().to_string(),
                source,
            })?;
            frames.push(decode_csv(text)?);
            debug!(file = %path.display(), "decoded bare delimited file");
        }
    }

    if frames.is_empty() {
        return Err(IngestError::NoInputData {
            dir: dir.to_path_buf(),
        });
    }
    Ok(frames)
}

/// Decodes every `.csv` member of one archive straight from memory; nothing
/// is extracted to disk. Members that are not delimited text are skipped.
pub fn read_archive(path: &Path) -> Result<Vec<DataFrame>, IngestError> {
    let bytes = fs::read(path)?;
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut frames = Vec::new();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if !entry.name().ends_with(MEMBER_SUFFIX) {
            continue;
        }
        let member = entry.name().to_string();

        let mut raw = Vec::new();
        entry.read_to_end(&mut raw)?;
        let text = std::str::from_utf8(&raw).map_err(|source| IngestError::Decode {
            location: format!("{}:{member}", path.display()),
            source,
        })?;

        let frame = decode_csv(text)?;
        debug!(
            archive = %path.display(),
            member = %member,
            rows = frame.height(),
            "decoded archive member"
        );
        frames.push(frame);
    }
    Ok(frames)
}

/// Sorted `*.{extension}` paths directly under `dir`.
fn list_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, IngestError> {
    let pattern = dir.join(format!("*.{extension}"));
    let mut paths = Vec::new();
    for entry in glob::glob(&pattern.to_string_lossy())? {
        paths.push(entry?);
    }
    paths.sort();
    Ok(paths)
}
