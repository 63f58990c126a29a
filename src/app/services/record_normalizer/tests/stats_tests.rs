//! Tests for run summary accounting

use super::super::stats::RunSummary;
use super::*;
use crate::app::models::{NormalizedPoint, RowError, SkipDiagnostic, SkipKind};

fn point(year: i32) -> NormalizedPoint {
    NormalizedPoint {
        lat: 30.5,
        lng: -97.7,
        city_id: "AUSTIN".to_string(),
        county_id: "227".to_string(),
        year,
    }
}

fn zero_skip(row_number: usize) -> SkipDiagnostic {
    SkipDiagnostic::new(
        row_number,
        RowError::ZeroCoordinates {
            latitude: "0".to_string(),
            longitude: "-97.7".to_string(),
        },
        &valid_row(),
    )
}

#[test]
fn test_summary_counts() {
    let summary = RunSummary::new(vec![point(2020), point(2021), point(2022)], vec![zero_skip(3)]);

    assert_eq!(summary.accepted_count(), 3);
    assert_eq!(summary.skipped_count(), 1);
    assert_eq!(summary.total_rows(), 4);
    assert_eq!(summary.acceptance_rate(), 75.0);
}

#[test]
fn test_summary_empty() {
    let summary = RunSummary::default();

    assert_eq!(summary.total_rows(), 0);
    assert_eq!(summary.acceptance_rate(), 0.0);
    assert!(summary.skipped_by_kind().is_empty());
}

#[test]
fn test_skipped_by_kind() {
    let missing = SkipDiagnostic::new(
        5,
        RowError::MissingColumn {
            column: "Crash_Date",
        },
        &valid_row(),
    );
    let summary = RunSummary::new(vec![point(2020)], vec![zero_skip(2), missing, zero_skip(7)]);

    let by_kind = summary.skipped_by_kind();
    assert_eq!(by_kind.get(&SkipKind::DegenerateValue), Some(&2));
    assert_eq!(by_kind.get(&SkipKind::MissingColumn), Some(&1));
    assert_eq!(by_kind.get(&SkipKind::ParseError), None);
}

#[test]
fn test_summary_string() {
    let summary = RunSummary::new(vec![point(2020)], vec![zero_skip(3)]);

    assert_eq!(
        summary.summary(),
        "Normalization Summary: 2 rows -> 1 points (50.0% accepted) | Skipped: 1"
    );
}
