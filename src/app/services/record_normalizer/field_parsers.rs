//! Field parsing utilities for crash rows
//!
//! Each parser works on the raw string value of one column and reports
//! failures as a [`RowError`] so the caller can skip the row.

use chrono::{Datelike, NaiveDate};

use crate::app::models::RowError;
use crate::constants::{
    CRASH_DATE_DAY_MONTH_MAX_DIGITS, CRASH_DATE_SEPARATOR, CRASH_DATE_YEAR_DIGITS,
    UNKNOWN_JURISDICTION,
};

/// Parse a `MM/DD/YYYY` crash date and return its year
///
/// Month and day may be one or two digits; the year must be exactly four and
/// at least 1. A single-digit day may carry one leading space (`3/ 5/2020`).
/// No other date format is attempted.
pub fn parse_crash_year(value: &str) -> Result<i32, RowError> {
    let invalid = || RowError::InvalidDate {
        value: value.to_string(),
    };

    let mut parts = value.split(CRASH_DATE_SEPARATOR);
    let (Some(month), Some(day), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let day = match day.strip_prefix(' ') {
        Some(padded) if padded.len() == 1 => padded,
        Some(_) => return Err(invalid()),
        None => day,
    };

    let month = date_component(month, 1, CRASH_DATE_DAY_MONTH_MAX_DIGITS).ok_or_else(invalid)?;
    let day = date_component(day, 1, CRASH_DATE_DAY_MONTH_MAX_DIGITS).ok_or_else(invalid)?;
    let year = date_component(year, CRASH_DATE_YEAR_DIGITS, CRASH_DATE_YEAR_DIGITS)
        .ok_or_else(invalid)?;

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .map(|date| date.year())
        .filter(|year| *year >= 1)
        .ok_or_else(invalid)
}

/// Digits-only date component with a width in `min..=max`
fn date_component(part: &str, min: usize, max: usize) -> Option<u32> {
    if part.len() < min || part.len() > max || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Parse a latitude or longitude value
///
/// Surrounding whitespace is ignored. Non-finite values are rejected since
/// they cannot be written as JSON numbers.
pub fn parse_coordinate(column: &'static str, value: &str) -> Result<f64, RowError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| RowError::InvalidNumber {
            column,
            value: value.to_string(),
        })
}

/// Exactly-zero latitude or longitude marks a missing location
pub fn is_degenerate(lat: f64, lng: f64) -> bool {
    lat == 0.0 || lng == 0.0
}

/// Pass a jurisdiction id through verbatim, substituting "Unknown" when empty
pub fn jurisdiction_or_unknown(value: &str) -> String {
    if value.is_empty() {
        UNKNOWN_JURISDICTION.to_string()
    } else {
        value.to_string()
    }
}
