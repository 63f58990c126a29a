//! Test utilities for record normalizer testing
//!
//! Helpers for building crash rows with the standard columns, used across
//! the test modules below.

use std::sync::Arc;

use crate::app::models::{ColumnIndex, RawRow};
use crate::constants::REQUIRED_HEADERS;

mod header_tests;
mod stats_tests;

/// Column index declaring exactly the required crash columns
pub fn standard_columns() -> Arc<ColumnIndex> {
    Arc::new(ColumnIndex::new(REQUIRED_HEADERS.iter().copied()))
}

/// Build a row over the standard columns
///
/// Values follow `REQUIRED_HEADERS` order: latitude, longitude, city id,
/// county id, crash date.
pub fn crash_row(lat: &str, lng: &str, city: &str, county: &str, date: &str) -> RawRow {
    RawRow::new(
        standard_columns(),
        [lat, lng, city, county, date]
            .into_iter()
            .map(String::from)
            .collect(),
    )
}

/// A row that normalizes cleanly
pub fn valid_row() -> RawRow {
    crash_row("30.5", "-97.7", "AUSTIN", "227", "01/02/2021")
}
