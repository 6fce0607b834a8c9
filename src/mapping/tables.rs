//! Static lookup tables from scanner labels to ZOD keys
//!
//! Keys follow the optimizer's disc constants. The set table is the one that
//! grows: every new disc set in the game needs an entry here before its discs
//! can be converted.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Main stat labels as shown in-game
///
/// `DEF` only exists as a percentage roll on discs, so both labels map to `def_`.
pub const MAIN_STATS: &[(&str, &str)] = &[
    ("HP", "hp"),
    ("ATK", "atk"),
    ("DEF", "def_"),
    ("HP%", "hp_"),
    ("ATK%", "atk_"),
    ("DEF%", "def_"),
    ("CRIT Rate", "crit_"),
    ("CRIT DMG", "crit_dmg_"),
    ("Anomaly Proficiency", "anomProf"),
    ("Anomaly Mastery", "anomMas_"),
    ("PEN Ratio", "pen_"),
    ("Energy Regen", "enerRegen_"),
    ("Impact", "impact_"),
    ("Electric DMG Bonus", "electric_dmg_"),
    ("Fire DMG Bonus", "fire_dmg_"),
    ("Ice DMG Bonus", "ice_dmg_"),
    ("Physical DMG Bonus", "physical_dmg_"),
    ("Ether DMG Bonus", "ether_dmg_"),
];

/// Slots whose HP/ATK/DEF main stats are always percentage rolls
pub const PERCENT_MAIN_STAT_SLOTS: &[&str] = &["4", "5", "6"];

/// Flat main stat keys and their percentage forms
pub const FLAT_TO_PERCENT_MAIN_STATS: &[(&str, &str)] =
    &[("atk", "atk_"), ("hp", "hp_"), ("def", "def_")];

/// Substat labels without a `%` marker
pub const FLAT_SUBSTATS: &[(&str, &str)] = &[
    ("HP", "hp"),
    ("ATK", "atk"),
    ("DEF", "def"),
    ("CRIT Rate", "crit_"),
    ("CRIT DMG", "crit_dmg_"),
    ("Anomaly Proficiency", "anomProf"),
    ("PEN", "pen"),
];

/// Substat labels that have a distinct percentage key
pub const PERCENT_SUBSTATS: &[(&str, &str)] = &[("HP", "hp_"), ("ATK", "atk_"), ("DEF", "def_")];

/// Disc set display names
pub const SET_NAMES: &[(&str, &str)] = &[
    ("Astral Voice", "AstralVoice"),
    ("Branch & Blade Song", "BranchBladeSong"),
    ("Chaos Jazz", "ChaosJazz"),
    ("Chaotic Metal", "ChaoticMetal"),
    ("Dawn's Bloom", "DawnsBloom"),
    ("Fanged Metal", "FangedMetal"),
    ("Freedom Blues", "FreedomBlues"),
    ("Hormone Punk", "HormonePunk"),
    ("Inferno Metal", "InfernoMetal"),
    ("King of the Summit", "KingOfTheSummit"),
    ("Moonlight Lullaby", "MoonlightLullaby"),
    ("Phaethon's Melody", "PhaethonsMelody"),
    ("Polar Metal", "PolarMetal"),
    ("Proto Punk", "ProtoPunk"),
    ("Puffer Electro", "PufferElectro"),
    ("Shadow Harmony", "ShadowHarmony"),
    ("Shining Aria", "ShiningAria"),
    ("Shockstar Disco", "ShockstarDisco"),
    ("Soul Rock", "SoulRock"),
    ("Swing Jazz", "SwingJazz"),
    ("Thunder Metal", "ThunderMetal"),
    ("White Water Ballad", "WhiteWaterBallad"),
    ("Woodpecker Electro", "WoodpeckerElectro"),
    ("Yunkui Tales", "YunkuiTales"),
];

type Table = HashMap<&'static str, &'static str>;

static MAIN_STAT_TABLE: Lazy<Table> = Lazy::new(|| MAIN_STATS.iter().copied().collect());

static FLAT_TO_PERCENT_TABLE: Lazy<Table> =
    Lazy::new(|| FLAT_TO_PERCENT_MAIN_STATS.iter().copied().collect());

static FLAT_SUBSTAT_TABLE: Lazy<Table> = Lazy::new(|| FLAT_SUBSTATS.iter().copied().collect());

static PERCENT_SUBSTAT_TABLE: Lazy<Table> =
    Lazy::new(|| PERCENT_SUBSTATS.iter().copied().collect());

static SET_NAME_TABLE: Lazy<Table> = Lazy::new(|| SET_NAMES.iter().copied().collect());

/// Look up a set's ZOD key by its exact display name
pub fn set_key(set_name: &str) -> Option<&'static str> {
    SET_NAME_TABLE.get(set_name).copied()
}

/// Look up a main stat's ZOD key by its exact label, before any slot adjustment
pub fn main_stat_key(label: &str) -> Option<&'static str> {
    MAIN_STAT_TABLE.get(label).copied()
}

/// Percentage form of a flat main stat key, if it has one
pub fn percent_main_stat_key(key: &str) -> Option<&'static str> {
    FLAT_TO_PERCENT_TABLE.get(key).copied()
}

/// Look up a substat key in the flat table
pub fn flat_substat_key(label: &str) -> Option<&'static str> {
    FLAT_SUBSTAT_TABLE.get(label).copied()
}

/// Look up a substat key in the percentage table
pub fn percent_substat_key(label: &str) -> Option<&'static str> {
    PERCENT_SUBSTAT_TABLE.get(label).copied()
}
