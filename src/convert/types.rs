//! Types for conversion results

use crate::models::ZodDisc;
use std::path::PathBuf;

/// A value the lookup tables could not map
///
/// Display text names the unrecognized value so the missing table entry is
/// easy to add.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionWarning {
    /// Disc dropped: set name not in the set table
    #[error("Unknown set name '{0}', skipping disc")]
    UnknownSetName(String),
    /// Disc dropped: main stat not in the main stat table
    #[error("Unknown main stat '{0}', skipping disc")]
    UnknownMainStat(String),
    /// Substat omitted; the rest of the disc is kept
    #[error("Unknown substat '{0}', skipping")]
    UnknownSubstat(String),
}

impl ConversionWarning {
    /// Whether this warning caused a whole disc to be dropped
    pub fn drops_disc(&self) -> bool {
        matches!(
            self,
            ConversionWarning::UnknownSetName(_) | ConversionWarning::UnknownMainStat(_)
        )
    }
}

/// Outcome of converting a single disc
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscOutcome {
    /// Disc converted; `skipped` lists substats that were left out
    Converted {
        disc: ZodDisc,
        skipped: Vec<ConversionWarning>,
    },
    /// Disc dropped entirely
    Dropped(ConversionWarning),
}

impl DiscOutcome {
    /// The converted disc, if any
    pub fn disc(&self) -> Option<&ZodDisc> {
        match self {
            DiscOutcome::Converted { disc, .. } => Some(disc),
            DiscOutcome::Dropped(_) => None,
        }
    }
}

/// Summary of a conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Discs written to the output document
    pub converted: usize,
    /// Discs dropped for an unknown set or main stat
    pub dropped: usize,
    /// Substats omitted from otherwise converted discs
    pub skipped_substats: usize,
    /// Every warning, in input order
    pub warnings: Vec<ConversionWarning>,
    pub output_path: PathBuf,
}

impl ConversionReport {
    /// One-line summary for the console
    pub fn summary(&self) -> String {
        format!(
            "Converted {} discs to ZOD format -> {}",
            self.converted,
            self.output_path.display()
        )
    }
}
