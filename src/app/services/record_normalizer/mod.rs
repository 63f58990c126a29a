//! Record normalizer for crash CSV rows
//!
//! This module turns raw crash rows into map-ready points. Rows that cannot be
//! normalized are classified and reported without stopping the run; only a
//! header missing required columns aborts it.
//!
//! ## Architecture
//!
//! - [`header`] - Required-column validation, done once before any row
//! - [`field_parsers`] - Date, coordinate and jurisdiction field parsing
//! - [`row_parser`] - Single-row normalization in field order
//! - [`normalizer`] - Run orchestration folding rows into a summary
//! - [`stats`] - Run summary and skip accounting
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use crash_points::app::models::{ColumnIndex, RawRow};
//! use crash_points::RecordNormalizer;
//!
//! # fn example() -> crash_points::Result<()> {
//! let columns = Arc::new(ColumnIndex::new([
//!     "Latitude", "Longitude", "Rpt_City_ID", "Rpt_CRIS_Cnty_ID", "Crash_Date",
//! ]));
//! let row = RawRow::new(
//!     columns.clone(),
//!     ["30.5", "-97.7", "AUSTIN", "227", "01/02/2021"]
//!         .into_iter()
//!         .map(String::from)
//!         .collect(),
//! );
//!
//! let summary = RecordNormalizer::default().normalize(&columns, vec![row])?;
//! assert_eq!(summary.accepted_count(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod field_parsers;
pub mod header;
pub mod normalizer;
pub mod row_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use header::validate_headers;
pub use normalizer::{RecordNormalizer, RowOutcome};
pub use row_parser::normalize_row;
pub use stats::RunSummary;
