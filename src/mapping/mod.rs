//! Scanner label to ZOD key mapping
//!
//! Provides the static lookup tables and the pure resolution helpers that sit
//! on top of them:
//! - Set names (exact match)
//! - Main stats, with the slot 4-6 percentage override
//! - Substats, with flat/percentage disambiguation
//! - Upgrade counts from `+N` label suffixes

pub mod stats;
pub mod tables;

pub use stats::{clean_stat_label, is_percent, parse_upgrades, slot_main_stat_key, substat_key};
pub use tables::{main_stat_key, set_key};
