//! Run summary for record normalization
//!
//! Holds the accepted points alongside a diagnostic for every skipped row,
//! plus the derived counts used for status reporting.

use std::collections::BTreeMap;

use crate::app::models::{NormalizedPoint, SkipDiagnostic, SkipKind};

/// Outcome of normalizing every row of one input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Accepted points in input order
    pub points: Vec<NormalizedPoint>,

    /// One diagnostic per skipped row, in input order
    pub skipped: Vec<SkipDiagnostic>,
}

impl RunSummary {
    pub fn new(points: Vec<NormalizedPoint>, skipped: Vec<SkipDiagnostic>) -> Self {
        Self { points, skipped }
    }

    /// Number of rows converted to points
    pub fn accepted_count(&self) -> usize {
        self.points.len()
    }

    /// Number of rows skipped for any reason
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Number of data rows seen
    pub fn total_rows(&self) -> usize {
        self.accepted_count() + self.skipped_count()
    }

    /// Skip counts per classification; kinds with no skips are omitted
    pub fn skipped_by_kind(&self) -> BTreeMap<SkipKind, usize> {
        let mut counts = BTreeMap::new();
        for diagnostic in &self.skipped {
            *counts.entry(diagnostic.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Accepted rows as a percentage of all rows
    pub fn acceptance_rate(&self) -> f64 {
        if self.total_rows() == 0 {
            0.0
        } else {
            (self.accepted_count() as f64 / self.total_rows() as f64) * 100.0
        }
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Normalization Summary: {} rows -> {} points ({:.1}% accepted) | Skipped: {}",
            self.total_rows(),
            self.accepted_count(),
            self.acceptance_rate(),
            self.skipped_count()
        )
    }
}
