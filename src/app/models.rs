//! Data models for crash point conversion
//!
//! This module contains the raw row representation read from the crash CSV,
//! the normalized point written to JSON, and the row-level error and
//! diagnostic types used to report rejected rows.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Raw Rows
// =============================================================================

/// Column name to position lookup shared by every row of one input file
///
/// When a header repeats a name the last column with that name wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnIndex {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    /// Build the index from the header row in column order
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let positions = names
            .iter()
            .enumerate()
            .map(|(position, name)| (name.clone(), position))
            .collect();

        Self { names, positions }
    }

    /// Position of a column, if the header declares it
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Check whether the header declares a column
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Declared column names in header order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of declared columns, duplicates included
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Required columns the header does not declare, in `required` order
    pub fn missing(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| !self.contains(name))
            .map(|name| name.to_string())
            .collect()
    }
}

/// One data line of the crash CSV, keyed by column name
///
/// A row shorter than the header lacks its trailing columns; values beyond
/// the header are kept but never addressable by name.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    columns: Arc<ColumnIndex>,
    values: Vec<String>,
}

impl RawRow {
    pub fn new(columns: Arc<ColumnIndex>, values: Vec<String>) -> Self {
        Self { columns, values }
    }

    /// Build a standalone row from `(column, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let (names, values): (Vec<String>, Vec<String>) = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .unzip();

        Self {
            columns: Arc::new(ColumnIndex::new(names)),
            values,
        }
    }

    /// Value of a column, `None` when the column is structurally absent
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .position(column)
            .and_then(|position| self.values.get(position))
            .map(String::as_str)
    }

    /// Value of a column that must be present
    pub fn require(&self, column: &'static str) -> Result<&str, RowError> {
        self.get(column).ok_or(RowError::MissingColumn { column })
    }

    /// Number of values carried by the row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for RawRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (position, name) in self.columns.names().iter().enumerate() {
            // Shadowed duplicates are not addressable, so they are not shown
            if self.columns.position(name) != Some(position) {
                continue;
            }
            let Some(value) = self.values.get(position) else {
                continue;
            };
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}: {:?}", name, value)?;
            first = false;
        }
        write!(f, "}}")
    }
}

// =============================================================================
// Normalized Points
// =============================================================================

/// A crash location ready for map rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub lat: f64,
    pub lng: f64,
    pub city_id: String,
    pub county_id: String,
    pub year: i32,
}

// =============================================================================
// Row-Level Errors
// =============================================================================

/// Why a single row was rejected
///
/// These never abort a run; each one becomes a [`SkipDiagnostic`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("invalid date '{value}' (expected MM/DD/YYYY)")]
    InvalidDate { value: String },

    #[error("invalid number '{value}' for {column}")]
    InvalidNumber { column: &'static str, value: String },

    #[error("zero coordinates (Latitude={latitude}, Longitude={longitude})")]
    ZeroCoordinates { latitude: String, longitude: String },

    #[error("missing column '{column}'")]
    MissingColumn { column: &'static str },
}

impl RowError {
    /// Classification used for reporting
    pub fn kind(&self) -> SkipKind {
        match self {
            RowError::InvalidDate { .. } | RowError::InvalidNumber { .. } => SkipKind::ParseError,
            RowError::ZeroCoordinates { .. } => SkipKind::DegenerateValue,
            RowError::MissingColumn { .. } => SkipKind::MissingColumn,
        }
    }

}

/// Classification of a skipped row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkipKind {
    /// Date or coordinate fields not in the expected format
    ParseError,
    /// A required column is structurally absent from the row
    MissingColumn,
    /// Coordinates are exactly zero
    DegenerateValue,
}

impl SkipKind {
    pub fn label(&self) -> &'static str {
        match self {
            SkipKind::ParseError => "Invalid data",
            SkipKind::MissingColumn => "Missing column",
            SkipKind::DegenerateValue => "Zero coordinates",
        }
    }
}

impl fmt::Display for SkipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Report for one rejected row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipDiagnostic {
    /// 1-based line number, the header being row 1
    pub row_number: usize,
    pub error: RowError,
    /// Full row content, kept for parse errors only
    pub row: Option<String>,
}

impl SkipDiagnostic {
    /// Build the diagnostic for a rejected row
    pub fn new(row_number: usize, error: RowError, raw: &RawRow) -> Self {
        let row = match error.kind() {
            SkipKind::ParseError => Some(raw.to_string()),
            SkipKind::MissingColumn | SkipKind::DegenerateValue => None,
        };

        Self {
            row_number,
            error,
            row,
        }
    }

    pub fn kind(&self) -> SkipKind {
        self.error.kind()
    }
}

impl fmt::Display for SkipDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Skipped row {}: ", self.row_number)?;
        match &self.error {
            RowError::ZeroCoordinates {
                latitude,
                longitude,
            } => write!(
                f,
                "Zero coordinates (Latitude={}, Longitude={})",
                latitude, longitude
            ),
            RowError::MissingColumn { column } => {
                write!(f, "Missing column (Error: '{}')", column)
            }
            error => match &self.row {
                Some(row) => write!(f, "Invalid data (Error: {}, Row: {})", error, row),
                None => write!(f, "Invalid data (Error: {})", error),
            },
        }
    }
}
