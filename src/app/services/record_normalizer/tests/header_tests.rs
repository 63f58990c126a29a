//! Tests for required-column validation

use super::super::header::validate_headers;
use crate::Error;
use crate::app::models::ColumnIndex;
use crate::constants::REQUIRED_HEADERS;

#[test]
fn test_all_required_headers_present() {
    let columns = ColumnIndex::new(REQUIRED_HEADERS.iter().copied());

    assert!(validate_headers(&columns, REQUIRED_HEADERS).is_ok());
}

#[test]
fn test_extra_columns_are_ignored() {
    let columns = ColumnIndex::new([
        "Crash_ID",
        "Crash_Date",
        "Latitude",
        "Longitude",
        "Rpt_City_ID",
        "Rpt_CRIS_Cnty_ID",
        "Crash_Sev_ID",
    ]);

    assert!(validate_headers(&columns, REQUIRED_HEADERS).is_ok());
}

#[test]
fn test_missing_county_header_names_exactly_that_column() {
    let columns = ColumnIndex::new(["Latitude", "Longitude", "Rpt_City_ID", "Crash_Date"]);

    match validate_headers(&columns, REQUIRED_HEADERS) {
        Err(Error::Schema { missing }) => {
            assert_eq!(missing, vec!["Rpt_CRIS_Cnty_ID".to_string()]);
        }
        other => panic!("Expected Schema error, got {:?}", other),
    }
}

#[test]
fn test_missing_headers_listed_in_required_order() {
    let columns = ColumnIndex::new(["Rpt_City_ID", "Crash_Date"]);

    let error = validate_headers(&columns, REQUIRED_HEADERS).unwrap_err();
    assert_eq!(
        error.to_string(),
        r#"Missing required headers: ["Latitude", "Longitude", "Rpt_CRIS_Cnty_ID"]"#
    );
}

#[test]
fn test_header_names_are_case_sensitive() {
    let columns = ColumnIndex::new([
        "latitude",
        "Longitude",
        "Rpt_City_ID",
        "Rpt_CRIS_Cnty_ID",
        "Crash_Date",
    ]);

    match validate_headers(&columns, REQUIRED_HEADERS) {
        Err(Error::Schema { missing }) => assert_eq!(missing, vec!["Latitude".to_string()]),
        other => panic!("Expected Schema error, got {:?}", other),
    }
}
