//! Configuration management and validation.
//!
//! Resolves the input and output locations from built-in defaults, an
//! optional TOML file, and command-line overrides, in that order.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Locations used by one conversion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Crash CSV to read
    pub input_path: PathBuf,

    /// JSON file to write
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl Config {
    /// Default config file location under the user config directory
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))
    }

    /// Parse a TOML config; keys left out keep their defaults
    pub fn from_toml_str(content: &str, source: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse {
            path: source.to_path_buf(),
            source: e,
        })
    }

    /// Load a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file '{}'", path.display()), e)
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Load with layered approach (defaults -> file -> overrides)
    pub fn load_layered(
        input_path: Option<PathBuf>,
        output_path: Option<PathBuf>,
        config_file: Option<&Path>,
    ) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading config file {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        if let Some(input_path) = input_path {
            config.input_path = input_path;
        }
        if let Some(output_path) = output_path {
            config.output_path = output_path;
        }

        Ok(config)
    }

    /// Reject configurations that cannot produce a sensible run
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(Error::configuration("Input path cannot be empty"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(Error::configuration("Output path cannot be empty"));
        }
        if self.input_path == self.output_path {
            return Err(Error::configuration(format!(
                "Input and output paths must differ (both are '{}')",
                self.input_path.display()
            )));
        }
        Ok(())
    }
}
