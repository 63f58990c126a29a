//! File-reading source for crash CSV exports
//!
//! Reads the whole file into a header index plus raw rows. Rows may be
//! shorter or longer than the header; the normalizer decides what a short
//! row means.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use crate::app::models::{ColumnIndex, RawRow};
use crate::{Error, Result};

/// Header and data rows of one crash CSV file
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub columns: Arc<ColumnIndex>,
    pub rows: Vec<RawRow>,
}

/// Reads a comma-delimited, UTF-8 crash export
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the header row and every data row
    ///
    /// A missing file is reported as [`Error::ResourceNotFound`] before
    /// anything is read.
    pub fn read(&self) -> Result<CsvTable> {
        if !self.path.is_file() {
            return Err(Error::resource_not_found(&self.path));
        }

        info!("Reading crash records from {}", self.path.display());

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| self.csv_error("Failed to open CSV file", e))?;

        let headers = reader
            .headers()
            .map_err(|e| self.csv_error("Failed to read CSV headers", e))?;
        let columns = Arc::new(ColumnIndex::new(headers.iter()));
        debug!("Header declares {} columns", columns.len());

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| self.csv_error("Failed to read CSV record", e))?;
            rows.push(RawRow::new(
                columns.clone(),
                record.iter().map(String::from).collect(),
            ));
        }

        debug!("Read {} data rows", rows.len());
        Ok(CsvTable { columns, rows })
    }

    fn csv_error(&self, message: &str, source: csv::Error) -> Error {
        Error::csv(self.path.display().to_string(), message, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("crashes.csv");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "Crash_ID,Latitude,Longitude\n1,30.5,-97.7\n2,30.6,-97.8\n",
        );

        let table = CsvSource::new(&path).read().unwrap();

        assert_eq!(table.columns.names(), ["Crash_ID", "Latitude", "Longitude"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1].get("Latitude"), Some("30.6"));
    }

    #[test]
    fn test_missing_file_is_resource_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.csv");

        match CsvSource::new(&path).read() {
            Err(Error::ResourceNotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("Expected ResourceNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_short_and_long_rows_are_kept() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "a,b,c\n1,2\n1,2,3,4\n");

        let table = CsvSource::new(&path).read().unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].get("c"), None);
        assert_eq!(table.rows[1].get("c"), Some("3"));
        assert_eq!(table.rows[1].len(), 4);
    }

    #[test]
    fn test_quoted_fields_and_empty_values() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "city,county\n\"AUSTIN, TX\",\n");

        let table = CsvSource::new(&path).read().unwrap();

        assert_eq!(table.rows[0].get("city"), Some("AUSTIN, TX"));
        assert_eq!(table.rows[0].get("county"), Some(""));
    }

    #[test]
    fn test_header_only_file_has_no_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "Latitude,Longitude\n");

        let table = CsvSource::new(&path).read().unwrap();

        assert_eq!(table.columns.len(), 2);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_csv_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, b"a,b\n\xff\xfe,1\n").unwrap();

        let result = CsvSource::new(&path).read();

        assert!(matches!(result, Err(Error::Csv { .. })));
    }
}
