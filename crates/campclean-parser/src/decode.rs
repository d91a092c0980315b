use polars::prelude::*;

use crate::errors::IngestError;

/// Parses headered CSV text into an all-string `DataFrame`. An empty field
/// decodes to null, never to a sentinel string, so downstream rewrites can
/// match on presence. Keeping every column `String` leaves value
/// representation untouched until the mapper decides what each field means.
pub fn decode_csv(text: &str) -> Result<DataFrame, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        for (values, cell) in cells.iter_mut().zip(record.iter()) {
            values.push(if cell.is_empty() {
                None
            } else {
                Some(cell.to_string())
            });
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(cells)
        .map(|(name, values)| Series::new(name.into(), values).into())
        .collect();
    Ok(DataFrame::new(columns)?)
}
