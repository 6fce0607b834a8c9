//! Scanner disc to ZOD disc conversion

use super::config::ConverterConfig;
use super::error::{ConvertError, ConvertResult};
use super::types::{ConversionReport, ConversionWarning, DiscOutcome};
use crate::export::ZodExporter;
use crate::import::ScannerImporter;
use crate::mapping::{clean_stat_label, parse_upgrades, set_key, slot_main_stat_key, substat_key};
use crate::models::{ScanDisc, ZodDisc, ZodDocument, ZodSubstat};
use std::path::Path;
use tracing::debug;

/// Convert one scanner disc
///
/// An unknown set name or main stat drops the disc. An unknown substat is
/// left out and the rest of the disc is kept.
pub fn convert_disc(disc: &ScanDisc) -> DiscOutcome {
    let Some(set_key) = set_key(&disc.set_name) else {
        return DiscOutcome::Dropped(ConversionWarning::UnknownSetName(disc.set_name.clone()));
    };

    let slot_key = disc.partition_number.clone();
    let Some(main_stat_key) = slot_main_stat_key(&slot_key, &disc.drive_base_stat) else {
        return DiscOutcome::Dropped(ConversionWarning::UnknownMainStat(
            disc.drive_base_stat.clone(),
        ));
    };

    let mut substats = Vec::with_capacity(disc.random_stats.len());
    let mut skipped = Vec::new();
    for stat in &disc.random_stats {
        let upgrades = parse_upgrades(&stat.name);
        let label = clean_stat_label(&stat.name);
        match substat_key(&label, &stat.value) {
            Some(key) => substats.push(ZodSubstat::new(key, upgrades)),
            None => skipped.push(ConversionWarning::UnknownSubstat(label)),
        }
    }

    DiscOutcome::Converted {
        disc: ZodDisc {
            set_key: set_key.to_string(),
            slot_key,
            level: disc.drive_current_level,
            rarity: disc.drive_rarity.clone(),
            main_stat_key: main_stat_key.to_string(),
            substats,
        },
        skipped,
    }
}

/// Convert a sequence of scanner discs, preserving order
///
/// Returns the converted discs and every warning raised along the way.
pub fn convert_discs(discs: &[ScanDisc]) -> (Vec<ZodDisc>, Vec<ConversionWarning>) {
    let mut converted = Vec::with_capacity(discs.len());
    let mut warnings = Vec::new();

    for (index, disc) in discs.iter().enumerate() {
        match convert_disc(disc) {
            DiscOutcome::Converted { disc, skipped } => {
                for warning in &skipped {
                    debug!("Disc {}: {}", index, warning);
                }
                warnings.extend(skipped);
                debug!("Disc {}: converted as {} slot {}", index, disc.set_key, disc.slot_key);
                converted.push(disc);
            }
            DiscOutcome::Dropped(warning) => {
                debug!("Disc {}: {}", index, warning);
                warnings.push(warning);
            }
        }
    }

    (converted, warnings)
}

/// Runs a full file-to-file conversion
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    /// Create a converter with the given config
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Build the ZOD document for a set of scanner discs without touching disk
    pub fn build_document(&self, discs: &[ScanDisc]) -> (ZodDocument, Vec<ConversionWarning>) {
        let (converted, warnings) = convert_discs(discs);
        let document = ZodDocument {
            format: self.config.format.clone(),
            version: self.config.version,
            source: self.config.source.clone(),
            discs: converted,
        };
        (document, warnings)
    }

    /// Read the input document, convert it, and write the output document
    ///
    /// The output file is only written once every disc has been converted.
    pub fn run(&self) -> ConvertResult<ConversionReport> {
        let discs = ScannerImporter::new().import_file(&self.config.input_path)?;
        let (document, warnings) = self.build_document(&discs);

        if let Err(source) = ZodExporter::write_file(&document, &self.config.output_path) {
            return Err(ConvertError::Output { source, warnings });
        }

        let dropped = warnings.iter().filter(|w| w.drops_disc()).count();
        Ok(ConversionReport {
            converted: document.discs.len(),
            dropped,
            skipped_substats: warnings.len() - dropped,
            warnings,
            output_path: self.config.output_path.clone(),
        })
    }
}

/// Convert the scanner document at `input_path` into a ZOD document at `output_path`
pub fn convert(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> ConvertResult<ConversionReport> {
    let config = ConverterConfig::new()
        .with_input_path(input_path.as_ref())
        .with_output_path(output_path.as_ref());
    Converter::new(config).run()
}
