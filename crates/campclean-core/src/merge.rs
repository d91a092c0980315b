use polars::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::schema::CLIENT_ID;

/// Concatenates extracted frames into one dataset via a diagonal union. The
/// output column set is the union of all input columns in first-seen order;
/// rows keep the relative order of frames and of rows within each frame.
/// Cells for columns a source frame lacks are null.
///
/// The merged frame always carries a `client_id` column on the way out:
/// inherited when any source provided one, otherwise synthesized as the
/// zero-based row index in final merge order. Uniqueness of inherited ids is
/// the caller's responsibility.
pub fn merge_frames(frames: Vec<DataFrame>) -> Result<DataFrame> {
    let mut merged = if frames.is_empty() {
        DataFrame::empty()
    } else {
        let inputs: Vec<LazyFrame> = frames.into_iter().map(|frame| frame.lazy()).collect();
        concat(
            inputs,
            UnionArgs {
                diagonal: true,
                ..Default::default()
            },
        )?
        .collect()?
    };

    if merged.column(CLIENT_ID).is_err() {
        let ids: Vec<i64> = (0..merged.height() as i64).collect();
        merged.with_column(Series::new(CLIENT_ID.into(), ids))?;
        debug!(rows = merged.height(), "synthesized client_id column");
    }
    Ok(merged)
}
