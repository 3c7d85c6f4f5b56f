//! Date-range expressions for the `--range` export filter.
//!
//! Accepted forms: `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and colon-separated
//! spans of any two of those (`YYYY-MM:YYYY-MM`, ...).

use crate::errors::{AppError, AppResult};
use crate::utils::date::generate_from_period;
use chrono::NaiveDate;

/// Resolve a range expression to inclusive date bounds.
pub fn parse_range(expr: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let parts: Vec<&str> = expr.split(':').collect();

    match parts.as_slice() {
        [single] => {
            let days = generate_from_period(single).map_err(AppError::InvalidDate)?;
            bounds(&days, expr)
        }
        [start, end] => {
            let start_days = generate_from_period(start).map_err(AppError::InvalidDate)?;
            let end_days = generate_from_period(end).map_err(AppError::InvalidDate)?;

            let (s, _) = bounds(&start_days, expr)?;
            let (_, e) = bounds(&end_days, expr)?;

            if e < s {
                return Err(AppError::InvalidDate(format!(
                    "Range end before start: {expr}"
                )));
            }
            Ok((s, e))
        }
        _ => Err(AppError::InvalidDate(format!("Invalid range: {expr}"))),
    }
}

fn bounds(days: &[NaiveDate], expr: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match (days.first(), days.last()) {
        (Some(first), Some(last)) => Ok((*first, *last)),
        _ => Err(AppError::InvalidDate(format!("Empty range: {expr}"))),
    }
}
