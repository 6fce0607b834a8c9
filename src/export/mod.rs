//! Export functionality
//!
//! Serializes converted discs as a ZOD document.

pub mod zod;

use std::path::PathBuf;

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Failed to write {}: {source}", path.display())]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// Re-export for convenience
pub use zod::ZodExporter;
