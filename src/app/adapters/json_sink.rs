//! File-writing sink for normalized crash points
//!
//! Serializes the points as a pretty-printed JSON array. The file is written
//! through a temporary file in the destination directory and then renamed
//! into place, so readers never observe a partial file.

use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::app::models::NormalizedPoint;
use crate::{Error, Result};

/// Writes the point collection to one JSON file
#[derive(Debug, Clone)]
pub struct JsonSink {
    path: PathBuf,
}

impl JsonSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Render points as a JSON array with two-space indentation
    pub fn render(points: &[NormalizedPoint]) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(points)
            .map_err(|e| Error::json("Failed to serialize crash points", e))
    }

    /// Write every point, replacing any existing file; returns bytes written
    pub fn write(&self, points: &[NormalizedPoint]) -> Result<u64> {
        let parent = self.ensure_parent_directory()?;
        let bytes = Self::render(points)?;

        let mut temp_file = NamedTempFile::new_in(&parent).map_err(|e| {
            Error::io(
                format!("Failed to create temporary file in {}", parent.display()),
                e,
            )
        })?;
        temp_file
            .write_all(&bytes)
            .and_then(|_| temp_file.flush())
            .map_err(|e| Error::io("Failed to write crash points", e))?;
        temp_file.persist(&self.path).map_err(|e| {
            Error::io(
                format!("Failed to save output to {}", self.path.display()),
                e.error,
            )
        })?;

        info!(
            "Wrote {} points ({} bytes) to {}",
            points.len(),
            bytes.len(),
            self.path.display()
        );
        Ok(bytes.len() as u64)
    }

    /// Create the output's parent directory if absent
    fn ensure_parent_directory(&self) -> Result<PathBuf> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        if !parent.exists() {
            debug!("Creating output directory {}", parent.display());
            std::fs::create_dir_all(&parent).map_err(|e| {
                Error::io(
                    format!("Failed to create output directory {}", parent.display()),
                    e,
                )
            })?;
        }

        Ok(parent)
    }
}
