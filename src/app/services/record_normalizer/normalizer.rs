//! Run orchestration for record normalization
//!
//! Validates the header once, then folds every row into either a point or a
//! skip diagnostic. Row failures never escape this module.

use tracing::info;

use super::header::validate_headers;
use super::row_parser::normalize_row;
use super::stats::RunSummary;
use crate::Result;
use crate::app::models::{ColumnIndex, NormalizedPoint, RawRow, SkipDiagnostic};
use crate::constants::{FIRST_DATA_ROW_NUMBER, REQUIRED_HEADERS};

/// Result of normalizing a single row
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Accepted(NormalizedPoint),
    Skipped(SkipDiagnostic),
}

/// Converts raw crash rows into normalized points
///
/// Holds no state between runs: the same header and rows always produce the
/// same summary.
#[derive(Debug, Clone)]
pub struct RecordNormalizer {
    required_headers: Vec<String>,
}

impl Default for RecordNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordNormalizer {
    /// Create a normalizer requiring the standard crash columns
    pub fn new() -> Self {
        Self::with_required_headers(REQUIRED_HEADERS.iter().copied())
    }

    /// Create a normalizer with a custom required-header set
    pub fn with_required_headers<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required_headers: required.into_iter().map(Into::into).collect(),
        }
    }

    /// Columns the header must declare
    pub fn required_headers(&self) -> &[String] {
        &self.required_headers
    }

    /// Check the header row against the required set
    pub fn validate_headers(&self, columns: &ColumnIndex) -> Result<()> {
        let required: Vec<&str> = self.required_headers.iter().map(String::as_str).collect();
        validate_headers(columns, &required)
    }

    /// Normalize one row; `row_number` counts the header as row 1
    pub fn normalize_row(&self, row_number: usize, row: &RawRow) -> RowOutcome {
        match normalize_row(row) {
            Ok(point) => RowOutcome::Accepted(point),
            Err(error) => RowOutcome::Skipped(SkipDiagnostic::new(row_number, error, row)),
        }
    }

    /// Validate the header, then normalize every row in input order
    ///
    /// Fails only when the header lacks a required column, in which case no
    /// row is looked at.
    pub fn normalize<I>(&self, columns: &ColumnIndex, rows: I) -> Result<RunSummary>
    where
        I: IntoIterator<Item = RawRow>,
    {
        self.validate_headers(columns)?;

        let (points, skipped) = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| self.normalize_row(index + FIRST_DATA_ROW_NUMBER, &row))
            .fold(
                (Vec::new(), Vec::new()),
                |(mut points, mut skipped), outcome| {
                    match outcome {
                        RowOutcome::Accepted(point) => points.push(point),
                        RowOutcome::Skipped(diagnostic) => skipped.push(diagnostic),
                    }
                    (points, skipped)
                },
            );

        let summary = RunSummary::new(points, skipped);
        info!("{}", summary.summary());
        Ok(summary)
    }
}
