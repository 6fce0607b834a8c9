//! Scanner disc model
//!
//! One entry of the scanner's `scan_data.json` array. The scanner is loose about
//! scalar types (slot and level show up as numbers or strings), so those fields
//! go through lenient deserializers. Missing and `null` fields fall back to the
//! same values the scanner tooling has always assumed, so one unreadable field
//! only costs its own disc at lookup time.

use serde::{Deserialize, Deserializer, Serialize};

/// A disc record as emitted by the scanner
///
/// # Example
///
/// ```rust
/// use disc_zod_converter::models::ScanDisc;
///
/// let disc: ScanDisc = serde_json::from_str(
///     r#"{"set_name": "Swing Jazz", "partition_number": 4, "drive_base_stat": "ATK"}"#,
/// ).unwrap();
/// assert_eq!(disc.partition_number, "4");
/// assert_eq!(disc.drive_rarity, "S");
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScanDisc {
    /// English display name of the disc set (e.g. "Swing Jazz")
    #[serde(default, deserialize_with = "null_as_default")]
    pub set_name: String,
    /// Slot identifier, kept in its string form ("1".."6")
    #[serde(default, deserialize_with = "deserialize_slot")]
    pub partition_number: String,
    #[serde(default = "default_rarity", deserialize_with = "deserialize_rarity")]
    pub drive_rarity: String,
    #[serde(default, deserialize_with = "deserialize_level")]
    pub drive_current_level: u32,
    /// Main stat label, possibly `%`-suffixed (e.g. "ATK", "DEF%")
    #[serde(default, deserialize_with = "null_as_default")]
    pub drive_base_stat: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub random_stats: Vec<RandomStat>,
}

impl ScanDisc {
    /// Create a disc with no substats
    pub fn new(
        set_name: impl Into<String>,
        partition_number: impl Into<String>,
        drive_base_stat: impl Into<String>,
    ) -> Self {
        Self {
            set_name: set_name.into(),
            partition_number: partition_number.into(),
            drive_rarity: default_rarity(),
            drive_current_level: 0,
            drive_base_stat: drive_base_stat.into(),
            random_stats: Vec::new(),
        }
    }

    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.drive_rarity = rarity.into();
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.drive_current_level = level;
        self
    }

    /// Append a raw substat pair
    pub fn with_random_stat(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.random_stats.push(RandomStat::new(name, value));
        self
    }
}

/// A raw substat pair, serialized by the scanner as `[name, value]`
///
/// `name` may carry a `+N` upgrade suffix and/or `%`; `value` may carry `%`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRandomStat", into = "RawRandomStat")]
pub struct RandomStat {
    pub name: String,
    pub value: String,
}

impl RandomStat {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawRandomStat(String, Scalar);

impl From<RawRandomStat> for RandomStat {
    fn from(raw: RawRandomStat) -> Self {
        Self {
            name: raw.0,
            value: raw.1.into_string(),
        }
    }
}

impl From<RandomStat> for RawRandomStat {
    fn from(stat: RandomStat) -> Self {
        RawRandomStat(stat.name, Scalar::String(stat.value))
    }
}

/// A JSON scalar the scanner may emit as either a string or a number
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Scalar {
    String(String),
    Number(serde_json::Number),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::String(s) => s,
            Scalar::Number(n) => n.to_string(),
        }
    }
}

fn default_rarity() -> String {
    "S".to_string()
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_rarity<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_rarity))
}

fn deserialize_slot<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_string)
        .unwrap_or_default())
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let Some(level) = Option::<Scalar>::deserialize(deserializer)? else {
        return Ok(0);
    };
    match level {
        Scalar::String(s) => s
            .trim()
            .parse::<u32>()
            .map_err(|e| D::Error::custom(format!("invalid drive level '{}': {}", s, e))),
        Scalar::Number(n) => {
            if let Some(level) = n.as_u64() {
                u32::try_from(level)
                    .map_err(|_| D::Error::custom(format!("drive level out of range: {}", n)))
            } else if let Some(level) = n.as_f64()
                && level.fract() == 0.0
                && level >= 0.0
                && level <= f64::from(u32::MAX)
            {
                Ok(level as u32)
            } else {
                Err(D::Error::custom(format!("invalid drive level: {}", n)))
            }
        }
    }
}
