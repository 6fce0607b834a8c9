//! Output formatting for CLI

use crate::convert::{ConversionReport, ConversionWarning};

/// One indented line per warning, in input order
pub fn format_warnings(warnings: &[ConversionWarning]) -> String {
    let mut output = String::new();
    for warning in warnings {
        output.push_str(&format!("  Warning: {}\n", warning));
    }
    output
}

/// Warnings followed by the summary line
pub fn format_report(report: &ConversionReport) -> String {
    let mut output = format_warnings(&report.warnings);
    output.push_str(&report.summary());
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_report() {
        let report = ConversionReport {
            converted: 1,
            dropped: 1,
            skipped_substats: 1,
            warnings: vec![
                ConversionWarning::UnknownSetName("Mystery Set".to_string()),
                ConversionWarning::UnknownSubstat("Impact".to_string()),
            ],
            output_path: PathBuf::from("out.json"),
        };

        assert_eq!(
            format_report(&report),
            "  Warning: Unknown set name 'Mystery Set', skipping disc\n  \
             Warning: Unknown substat 'Impact', skipping\n\
             Converted 1 discs to ZOD format -> out.json"
        );
    }

    #[test]
    fn test_format_report_without_warnings() {
        let report = ConversionReport {
            converted: 0,
            dropped: 0,
            skipped_substats: 0,
            warnings: Vec::new(),
            output_path: PathBuf::from("out.json"),
        };
        assert_eq!(format_warnings(&report.warnings), "");
        assert_eq!(
            format_report(&report),
            "Converted 0 discs to ZOD format -> out.json"
        );
    }
}
