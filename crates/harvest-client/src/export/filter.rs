use chrono::{DateTime, Datelike, NaiveDate};

use crate::export::NormalizedTransaction;
use crate::{ClientError, ClientResult};

/// Keeps only transactions dated in `year`. Stable: survivors stay in
/// extraction order. An unparseable date is fatal, not skipped.
pub(crate) fn retain_year(
    rows: Vec<NormalizedTransaction>,
    year: i32,
) -> ClientResult<Vec<NormalizedTransaction>> {
    let mut kept = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        if date_year(&row.date, index)? == year {
            kept.push(row);
        }
    }
    Ok(kept)
}

fn date_year(value: &str, record_index: usize) -> ClientResult<i32> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.year());
    }
    // Some captures carry full timestamps instead of plain dates.
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.year());
    }
    Err(ClientError::date_parse_failed(record_index, value))
}
