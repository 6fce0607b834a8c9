//! Models module
//!
//! Defines the scanner input records and the ZOD output document.

pub mod disc;
pub mod zod;

pub use disc::{RandomStat, ScanDisc};
pub use zod::{ZOD_FORMAT, ZOD_SOURCE, ZOD_VERSION, ZodDisc, ZodDocument, ZodSubstat};
