//! Crash Points Library
//!
//! Converts crash-record CSV exports into a simplified JSON point collection
//! suitable for map rendering.
//!
//! This library provides tools for:
//! - Reading crash CSV files into header-keyed raw rows
//! - Validating that the required columns are present before any processing
//! - Normalizing each row into a point (coordinates, jurisdiction ids, year)
//! - Classifying and reporting rejected rows without aborting the run
//! - Writing the accepted points as a pretty-printed JSON array

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod record_normalizer;
    }
    pub mod adapters {
        pub mod csv_source;
        pub mod json_sink;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{NormalizedPoint, RawRow, RowError, SkipDiagnostic, SkipKind};
pub use app::services::record_normalizer::{RecordNormalizer, RunSummary};
pub use config::Config;

use std::path::PathBuf;

/// Result type alias for crash point conversion
pub type Result<T> = std::result::Result<T, Error>;

/// Run-level error types. Any of these aborts the conversion.
///
/// Row-level problems are reported through [`RowError`] instead and never
/// surface here.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input file does not exist
    #[error("Input file {} not found", .path.display())]
    ResourceNotFound { path: PathBuf },

    /// Required columns absent from the header row
    #[error("Missing required headers: {missing:?}")]
    Schema { missing: Vec<String> },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV reading error
    #[error("CSV parsing error in file '{file}': {message}")]
    Csv {
        file: String,
        message: String,
        #[source]
        source: csv::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Configuration file '{}' is invalid: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create a resource not found error
    pub fn resource_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ResourceNotFound { path: path.into() }
    }

    /// Create a schema error listing the missing columns
    pub fn schema(missing: Vec<String>) -> Self {
        Self::Schema { missing }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV error with context
    pub fn csv(file: impl Into<String>, message: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a JSON serialization error
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
