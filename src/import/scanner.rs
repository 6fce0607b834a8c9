//! Scanner document importer

use super::ImportError;
use crate::models::ScanDisc;
use std::fs;
use std::path::Path;
use tracing::info;

/// Scanner Importer - parses the scanner's disc array
#[derive(Debug, Default, Clone, Copy)]
pub struct ScannerImporter;

impl ScannerImporter {
    /// Create a new scanner importer
    pub fn new() -> Self {
        Self
    }

    /// Parse a scanner document from a string
    ///
    /// # Example
    ///
    /// ```rust
    /// use disc_zod_converter::import::ScannerImporter;
    ///
    /// let discs = ScannerImporter::new()
    ///     .import(r#"[{"set_name": "Soul Rock", "partition_number": 1, "drive_base_stat": "HP"}]"#)
    ///     .unwrap();
    /// assert_eq!(discs[0].set_name, "Soul Rock");
    /// ```
    pub fn import(&self, content: &str) -> Result<Vec<ScanDisc>, ImportError> {
        // Some Windows tooling writes a BOM ahead of the array
        let content = content.trim_start_matches('\u{feff}');
        serde_json::from_str(content)
            .map_err(|e| ImportError::ParseError(format!("Invalid scanner JSON: {}", e)))
    }

    /// Read and parse a scanner document from disk
    pub fn import_file(&self, path: &Path) -> Result<Vec<ScanDisc>, ImportError> {
        let content = fs::read_to_string(path).map_err(|source| ImportError::FileReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let discs = self.import(&content)?;
        info!("Loaded {} discs from {}", discs.len(), path.display());
        Ok(discs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_empty_array() {
        let discs = ScannerImporter::new().import("[]").unwrap();
        assert!(discs.is_empty());
    }

    #[test]
    fn test_import_with_bom() {
        let discs = ScannerImporter::new().import("\u{feff}[{}]").unwrap();
        assert_eq!(discs.len(), 1);
    }

    #[test]
    fn test_import_rejects_object_document() {
        let err = ScannerImporter::new().import(r#"{"discs": []}"#).unwrap_err();
        assert!(matches!(err, ImportError::ParseError(_)));
    }

    #[test]
    fn test_import_missing_file() {
        let err = ScannerImporter::new()
            .import_file(Path::new("does/not/exist/scan_data.json"))
            .unwrap_err();
        assert!(matches!(err, ImportError::FileReadError { .. }));
        assert!(err.to_string().contains("scan_data.json"));
    }
}
