//! Stat label resolution
//!
//! Scanner substat labels look like `CRIT Rate+2` or `ATK%+1`: an optional `+N`
//! rank-up suffix and an optional `%` marker on top of the base label. Values
//! such as `6.0%` can carry the percent marker instead of the label.

use super::tables::{
    flat_substat_key, main_stat_key, percent_main_stat_key, percent_substat_key,
    PERCENT_MAIN_STAT_SLOTS,
};
use once_cell::sync::Lazy;
use regex::Regex;

const PERCENT_MARKER: char = '%';

// ASCII digits only, the set `u32` parsing accepts
static UPGRADE_SUFFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+([0-9]+)").unwrap());

/// Number of rolls a substat has received
///
/// The first `+N` in the label counts rank-ups, so the total is `N + 1` for the
/// initial roll. Labels without a suffix have only the initial roll.
pub fn parse_upgrades(raw_name: &str) -> u32 {
    match UPGRADE_SUFFIX_REGEX.captures(raw_name) {
        Some(caps) => caps[1]
            .parse::<u32>()
            .map_or(u32::MAX, |rank_ups| rank_ups.saturating_add(1)),
        None => 1,
    }
}

/// Remove every `+N` suffix from a raw substat label
pub fn clean_stat_label(raw_name: &str) -> String {
    UPGRADE_SUFFIX_REGEX
        .replace_all(raw_name, "")
        .trim()
        .to_string()
}

/// Whether a substat is a percentage roll, judged from its label or its value
pub fn is_percent(label: &str, value: &str) -> bool {
    label.contains(PERCENT_MARKER) || value.contains(PERCENT_MARKER)
}

/// Resolve a cleaned substat label and its value to a ZOD substat key
///
/// Percentage rolls prefer the percentage table; anything else, including
/// percentage rolls of stats with no percentage key (`CRIT Rate`), falls back
/// to the flat table.
pub fn substat_key(label: &str, value: &str) -> Option<&'static str> {
    let base = label.replace(PERCENT_MARKER, "");
    let base = base.trim();

    if is_percent(label, value)
        && let Some(key) = percent_substat_key(base)
    {
        return Some(key);
    }
    flat_substat_key(base)
}

/// Resolve a main stat label for a given slot
///
/// On slots 4-6 the flat HP/ATK/DEF keys are replaced by their percentage
/// forms, since those slots only ever roll percentages for them.
pub fn slot_main_stat_key(slot: &str, label: &str) -> Option<&'static str> {
    let key = main_stat_key(label)?;
    if PERCENT_MAIN_STAT_SLOTS.contains(&slot)
        && let Some(percent) = percent_main_stat_key(key)
    {
        return Some(percent);
    }
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_upgrades() {
        assert_eq!(parse_upgrades("HP"), 1);
        assert_eq!(parse_upgrades("HP+1"), 2);
        assert_eq!(parse_upgrades("CRIT Rate+2"), 3);
        assert_eq!(parse_upgrades("ATK%+4"), 5);
        assert_eq!(parse_upgrades("ATK%"), 1);
    }

    #[test]
    fn test_parse_upgrades_uses_first_suffix() {
        assert_eq!(parse_upgrades("HP+1+3"), 2);
    }

    #[test]
    fn test_non_ascii_digits_are_not_a_suffix() {
        assert_eq!(parse_upgrades("HP+\u{0663}"), 1);
        assert_eq!(clean_stat_label("HP+\u{0663}"), "HP+\u{0663}");
    }

    #[test]
    fn test_parse_upgrades_saturates() {
        assert_eq!(parse_upgrades("HP+99999999999"), u32::MAX);
    }

    #[test]
    fn test_clean_stat_label() {
        assert_eq!(clean_stat_label("CRIT Rate+2"), "CRIT Rate");
        assert_eq!(clean_stat_label("ATK%+1"), "ATK%");
        assert_eq!(clean_stat_label("HP +3"), "HP");
        assert_eq!(clean_stat_label("PEN"), "PEN");
    }

    #[test]
    fn test_clean_stat_label_is_idempotent() {
        for raw in ["CRIT DMG+4", "DEF%+2", "Anomaly Proficiency", "HP+1+1", " ATK +2 "] {
            let once = clean_stat_label(raw);
            assert_eq!(clean_stat_label(&once), once);
        }
    }

    #[test]
    fn test_substat_percent_from_label_or_value() {
        assert_eq!(substat_key("ATK%", "3%"), Some("atk_"));
        assert_eq!(substat_key("ATK", "3%"), Some("atk_"));
        assert_eq!(substat_key("ATK%", "19"), Some("atk_"));
        assert_eq!(substat_key("ATK", "19"), Some("atk"));
        assert_eq!(substat_key("DEF", "4.8%"), Some("def_"));
        assert_eq!(substat_key("HP", "112"), Some("hp"));
    }

    #[test]
    fn test_substat_percent_falls_back_to_flat() {
        assert_eq!(substat_key("CRIT Rate", "2.4%"), Some("crit_"));
        assert_eq!(substat_key("CRIT DMG%", "4.8%"), Some("crit_dmg_"));
        assert_eq!(substat_key("PEN", "9"), Some("pen"));
        assert_eq!(substat_key("Anomaly Proficiency", "9"), Some("anomProf"));
    }

    #[test]
    fn test_substat_unknown() {
        assert_eq!(substat_key("Impact", "6%"), None);
        assert_eq!(substat_key("PEN Ratio", "2.4%"), None);
        assert_eq!(substat_key("", ""), None);
    }

    #[test]
    fn test_slot_override_applies_to_slots_4_to_6() {
        for slot in ["4", "5", "6"] {
            assert_eq!(slot_main_stat_key(slot, "ATK"), Some("atk_"));
            assert_eq!(slot_main_stat_key(slot, "HP"), Some("hp_"));
            assert_eq!(slot_main_stat_key(slot, "DEF"), Some("def_"));
            assert_eq!(slot_main_stat_key(slot, "CRIT Rate"), Some("crit_"));
        }
    }

    #[test]
    fn test_slot_override_skips_slots_1_to_3() {
        assert_eq!(slot_main_stat_key("1", "HP"), Some("hp"));
        assert_eq!(slot_main_stat_key("2", "ATK"), Some("atk"));
        assert_eq!(slot_main_stat_key("3", "DEF"), Some("def_"));
        assert_eq!(slot_main_stat_key("1", "DEF%"), Some("def_"));
    }

    #[test]
    fn test_slot_main_stat_unknown() {
        assert_eq!(slot_main_stat_key("4", "Speed"), None);
        assert_eq!(slot_main_stat_key("4", ""), None);
    }
}
