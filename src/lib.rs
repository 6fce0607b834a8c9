//! Disc ZOD Converter - turns scanner disc exports into the ZOD optimizer format
//!
//! Provides:
//! - Scanner document import (`scan_output/scan_data.json`)
//! - Static stat/set lookup tables with slot-aware main stat resolution
//! - Per-disc conversion with recoverable-by-omission warnings
//! - ZOD document export (`scan_output/scan_data_ZOD.json`)

pub mod cli;
pub mod convert;
pub mod export;
pub mod import;
pub mod mapping;
pub mod models;

// Re-export commonly used types
pub use convert::{
    ConversionReport, ConversionWarning, ConvertError, Converter, ConverterConfig, DiscOutcome,
    convert, convert_disc, convert_discs,
};
pub use export::{ExportError, ZodExporter};
pub use import::{ImportError, ScannerImporter};

// Re-export models
pub use models::{RandomStat, ScanDisc, ZodDisc, ZodDocument, ZodSubstat};
