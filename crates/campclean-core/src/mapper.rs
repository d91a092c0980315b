use chrono::NaiveDate;
use polars::prelude::*;

use crate::error::{PipelineError, Result};
use crate::schema::{EntitySchema, Transform, CLIENT_ID, CONTACT_YEAR, DAY, MONTH};

/// Projects the merged dataset onto one target entity schema.
///
/// `client_id` is always the first output column. For every other field the
/// first present alias wins; when no alias is present the column is omitted
/// from this run's output rather than fabricated. Value rewrites run as
/// column expressions, and a null cell stays null through every string
/// rewrite.
pub fn project(data: &DataFrame, schema: &EntitySchema) -> Result<DataFrame> {
    if data.column(CLIENT_ID).is_err() {
        return Err(PipelineError::Processing(
            "merged dataset is missing client_id".to_string(),
        ));
    }

    let mut exprs = vec![col(CLIENT_ID)];
    let mut contact_dates = None;
    for field in schema.fields {
        if field.transform == Transform::ContactDate {
            if let Some(series) = compose_contact_dates(data, field.target)? {
                contact_dates = Some(series);
                continue;
            }
            // No day/month pair: fall through to the alias lookup, which
            // passes an already-clean column through if one exists.
        }

        let Some(source) = field
            .aliases
            .iter()
            .copied()
            .find(|alias| data.column(alias).is_ok())
        else {
            continue;
        };
        exprs.push(field_expr(field.transform, source, field.target));
    }

    let mut output = data.clone().lazy().select(exprs).collect()?;
    if let Some(series) = contact_dates {
        output.with_column(series)?;
    }
    Ok(output)
}

fn field_expr(transform: Transform, source: &str, target: &str) -> Expr {
    let expr = match transform {
        Transform::Passthrough | Transform::ContactDate => col(source),
        Transform::NormalizeJob => col(source)
            .str()
            .replace_all(lit("."), lit(""), true)
            .str()
            .replace_all(lit("-"), lit("_"), true),
        Transform::NormalizeEducation => {
            let rewritten = col(source).str().replace_all(lit("."), lit("_"), true);
            when(rewritten.clone().eq(lit("unknown")))
                .then(lit(NULL))
                .otherwise(rewritten)
        }
        Transform::YesToBinary => coded(col(source), "yes"),
        Transform::SuccessToBinary => coded(col(source), "success"),
    };
    expr.alias(target)
}

/// A null cell codes to 0, same as any non-positive value.
fn coded(source: Expr, positive: &str) -> Expr {
    when(source.eq(lit(positive.to_owned())))
        .then(lit(1))
        .otherwise(lit(0))
}

/// Builds the `last_contact_date` column from the day and month source
/// columns. Returns `Ok(None)` when either column is absent. Composition
/// stays a row-wise eager pass so a malformed pair surfaces with its exact
/// offending day and month values.
fn compose_contact_dates(data: &DataFrame, target: &str) -> Result<Option<Series>> {
    let (Ok(days), Ok(months)) = (data.column(DAY), data.column(MONTH)) else {
        return Ok(None);
    };

    let mut values: Vec<Option<String>> = Vec::with_capacity(data.height());
    for (day, month) in days.str()?.into_iter().zip(months.str()?.into_iter()) {
        values.push(contact_date(day, month)?);
    }
    Ok(Some(Series::new(target.into(), values)))
}

/// A null day or month propagates as a null date. Non-null values that do not
/// parse as integers, or do not form a real calendar date, abort the run:
/// malformed dates are a data-integrity error, not silently droppable.
fn contact_date(day: Option<&str>, month: Option<&str>) -> Result<Option<String>> {
    let (Some(day), Some(month)) = (day, month) else {
        return Ok(None);
    };

    let malformed = || PipelineError::MalformedDate {
        month: month.to_string(),
        day: day.to_string(),
    };
    let month_number: u32 = month.trim().parse().map_err(|_| malformed())?;
    let day_number: u32 = day.trim().parse().map_err(|_| malformed())?;
    let date =
        NaiveDate::from_ymd_opt(CONTACT_YEAR, month_number, day_number).ok_or_else(malformed)?;
    Ok(Some(date.format("%Y-%m-%d").to_string()))
}
