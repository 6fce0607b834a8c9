//! Configuration for conversion runs

use crate::models::{ZOD_FORMAT, ZOD_SOURCE, ZOD_VERSION};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Scanner export location, relative to the converter's directory
pub const DEFAULT_INPUT_PATH: &str = "scan_output/scan_data.json";
/// ZOD output location, relative to the converter's directory
pub const DEFAULT_OUTPUT_PATH: &str = "scan_output/scan_data_ZOD.json";

/// Configuration for a conversion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Scanner document to read
    pub input_path: PathBuf,
    /// ZOD document to write
    pub output_path: PathBuf,
    /// Value of the document's `format` field
    pub format: String,
    /// Value of the document's `version` field
    pub version: u32,
    /// Value of the document's `source` field
    pub source: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            format: ZOD_FORMAT.to_string(),
            version: ZOD_VERSION,
            source: ZOD_SOURCE.to_string(),
        }
    }
}

impl ConverterConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Default paths resolved against `base_dir`
    pub fn relative_to(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref();
        Self {
            input_path: base_dir.join(DEFAULT_INPUT_PATH),
            output_path: base_dir.join(DEFAULT_OUTPUT_PATH),
            ..Self::default()
        }
    }

    /// Set the scanner document path
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Set the ZOD document path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set the producer tag
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}
