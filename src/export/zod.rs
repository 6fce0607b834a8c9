//! ZOD exporter

use super::ExportError;
use crate::models::ZodDocument;
use std::fs;
use std::path::Path;
use tracing::info;

/// Exporter for the ZOD optimizer format
#[derive(Debug, Default, Clone, Copy)]
pub struct ZodExporter;

impl ZodExporter {
    /// Render a document as pretty-printed JSON with 2-space indentation
    pub fn export(document: &ZodDocument) -> Result<String, ExportError> {
        serde_json::to_string_pretty(document).map_err(|e| {
            ExportError::SerializationError(format!("Failed to serialize ZOD document: {}", e))
        })
    }

    /// Render a document and write it to `path`, replacing any existing file
    ///
    /// The parent directory is created when missing. Serialization happens
    /// before the file is touched, so a failed export never leaves a partial
    /// document behind.
    pub fn write_file(document: &ZodDocument, path: &Path) -> Result<(), ExportError> {
        let content = Self::export(document)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| ExportError::FileWriteError {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, content).map_err(|source| ExportError::FileWriteError {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "Wrote {} discs to {}",
            document.discs.len(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ZodDisc, ZodSubstat};

    #[test]
    fn test_export_layout() {
        let document = ZodDocument::new(vec![ZodDisc {
            set_key: "SoulRock".to_string(),
            slot_key: "1".to_string(),
            level: 0,
            rarity: "A".to_string(),
            main_stat_key: "hp".to_string(),
            substats: vec![ZodSubstat::new("pen", 1)],
        }]);

        let expected = r#"{
  "format": "ZOD",
  "version": 1,
  "source": "ZZZ-Scanner",
  "discs": [
    {
      "setKey": "SoulRock",
      "slotKey": "1",
      "level": 0,
      "rarity": "A",
      "mainStatKey": "hp",
      "substats": [
        {
          "key": "pen",
          "upgrades": 1
        }
      ]
    }
  ]
}"#;
        assert_eq!(ZodExporter::export(&document).unwrap(), expected);
    }

    #[test]
    fn test_export_empty_discs() {
        let json = ZodExporter::export(&ZodDocument::new(Vec::new())).unwrap();
        assert!(json.contains(r#""discs": []"#));
    }

    #[test]
    fn test_exporter_derives() {
        let exporter = ZodExporter::default();
        let copy = exporter;
        assert_eq!(format!("{:?}", exporter), "ZodExporter");
        assert_eq!(format!("{:?}", copy), "ZodExporter");
    }
}
