//! Single-row normalization
//!
//! Fields are consulted in a fixed order: crash date, latitude, longitude,
//! the zero-coordinate check, then the jurisdiction ids. The first failure
//! decides how the row is reported.

use super::field_parsers::{
    is_degenerate, jurisdiction_or_unknown, parse_coordinate, parse_crash_year,
};
use crate::app::models::{NormalizedPoint, RawRow, RowError};
use crate::constants::columns;

/// Normalize one raw crash row into a point
pub fn normalize_row(row: &RawRow) -> Result<NormalizedPoint, RowError> {
    let year = parse_crash_year(row.require(columns::CRASH_DATE)?)?;

    let raw_lat = row.require(columns::LATITUDE)?;
    let lat = parse_coordinate(columns::LATITUDE, raw_lat)?;
    let raw_lng = row.require(columns::LONGITUDE)?;
    let lng = parse_coordinate(columns::LONGITUDE, raw_lng)?;

    if is_degenerate(lat, lng) {
        return Err(RowError::ZeroCoordinates {
            latitude: raw_lat.to_string(),
            longitude: raw_lng.to_string(),
        });
    }

    let city_id = jurisdiction_or_unknown(row.require(columns::CITY_ID)?);
    let county_id = jurisdiction_or_unknown(row.require(columns::COUNTY_ID)?);

    Ok(NormalizedPoint {
        lat,
        lng,
        city_id,
        county_id,
        year,
    })
}
