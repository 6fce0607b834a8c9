//! Scanner to ZOD conversion
//!
//! This module provides:
//! - `convert_disc`: the pure per-record transform
//! - `convert_discs`: order-preserving conversion of a whole sequence
//! - `Converter` / `convert`: file-to-file runs returning a `ConversionReport`
//!
//! # Example
//!
//! ```rust
//! use disc_zod_converter::convert::{DiscOutcome, convert_disc};
//! use disc_zod_converter::models::ScanDisc;
//!
//! let disc = ScanDisc::new("Swing Jazz", "4", "ATK").with_random_stat("CRIT Rate+2", "6.0%");
//! let DiscOutcome::Converted { disc, .. } = convert_disc(&disc) else {
//!     panic!("known set and main stat");
//! };
//! assert_eq!(disc.main_stat_key, "atk_");
//! assert_eq!(disc.substats[0].upgrades, 3);
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod types;

pub use config::{ConverterConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
pub use converter::{Converter, convert, convert_disc, convert_discs};
pub use error::{ConvertError, ConvertResult};
pub use types::{ConversionReport, ConversionWarning, DiscOutcome};
