//! ZOD document model
//!
//! The ZOD schema is owned by the optimizer that imports it, so field names and
//! nesting here must stay exactly as the optimizer expects them.

use serde::{Deserialize, Serialize};

/// Schema identifier written to the `format` field
pub const ZOD_FORMAT: &str = "ZOD";
/// Schema version written to the `version` field
pub const ZOD_VERSION: u32 = 1;
/// Producer tag written to the `source` field
pub const ZOD_SOURCE: &str = "ZZZ-Scanner";

/// Top-level ZOD document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ZodDocument {
    pub format: String,
    pub version: u32,
    pub source: String,
    pub discs: Vec<ZodDisc>,
}

impl ZodDocument {
    /// Create a document with the standard header
    pub fn new(discs: Vec<ZodDisc>) -> Self {
        Self {
            format: ZOD_FORMAT.to_string(),
            version: ZOD_VERSION,
            source: ZOD_SOURCE.to_string(),
            discs,
        }
    }
}

/// A converted disc
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ZodDisc {
    pub set_key: String,
    pub slot_key: String,
    pub level: u32,
    pub rarity: String,
    pub main_stat_key: String,
    pub substats: Vec<ZodSubstat>,
}

/// A converted substat; `upgrades` counts the initial roll plus every rank-up
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ZodSubstat {
    pub key: String,
    pub upgrades: u32,
}

impl ZodSubstat {
    pub fn new(key: impl Into<String>, upgrades: u32) -> Self {
        Self {
            key: key.into(),
            upgrades,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_header() {
        let doc = ZodDocument::new(Vec::new());
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["format"], "ZOD");
        assert_eq!(value["version"], 1);
        assert_eq!(value["source"], "ZZZ-Scanner");
        assert_eq!(value["discs"], serde_json::json!([]));
    }

    #[test]
    fn test_disc_uses_camel_case_keys() {
        let disc = ZodDisc {
            set_key: "SwingJazz".to_string(),
            slot_key: "4".to_string(),
            level: 12,
            rarity: "S".to_string(),
            main_stat_key: "atk_".to_string(),
            substats: vec![ZodSubstat::new("crit_", 3)],
        };
        let json = serde_json::to_string(&disc).unwrap();
        assert_eq!(
            json,
            r#"{"setKey":"SwingJazz","slotKey":"4","level":12,"rarity":"S","mainStatKey":"atk_","substats":[{"key":"crit_","upgrades":3}]}"#
        );
    }
}
