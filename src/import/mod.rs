//! Import functionality
//!
//! Reads the scanner's disc export (`scan_data.json`): a JSON array of disc
//! objects.

pub mod scanner;

use std::path::PathBuf;

/// Error while reading the scanner document
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Failed to read scan file {}: {source}", path.display())]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    ParseError(String),
}

// Re-export for convenience
pub use scanner::ScannerImporter;
