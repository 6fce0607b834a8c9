//! Convert command implementation

use crate::cli::error::CliError;
use crate::cli::output::{format_report, format_warnings};
use crate::convert::{ConversionReport, Converter, ConverterConfig};
use std::path::{Path, PathBuf};

/// Arguments for the convert command
#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    /// Scanner document; defaults to `scan_output/scan_data.json` next to the binary
    pub input: Option<PathBuf>,
    /// ZOD document; defaults to `scan_output/scan_data_ZOD.json` next to the binary
    pub output: Option<PathBuf>,
}

/// Directory containing the running executable
fn executable_dir() -> Result<PathBuf, CliError> {
    let exe = std::env::current_exe()
        .map_err(|e| CliError::ExecutableDirError(format!("Failed to resolve executable: {}", e)))?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        CliError::ExecutableDirError(format!("{} has no parent directory", exe.display()))
    })
}

/// Build the run configuration: fixed paths next to `base_dir`, overridden by any explicit path
pub fn resolve_config(args: &ConvertArgs, base_dir: &Path) -> ConverterConfig {
    let mut config = ConverterConfig::relative_to(base_dir);
    if let Some(input) = &args.input {
        config = config.with_input_path(input);
    }
    if let Some(output) = &args.output {
        config = config.with_output_path(output);
    }
    config
}

/// Handle the convert command
pub fn handle_convert(args: &ConvertArgs) -> Result<ConversionReport, CliError> {
    let base_dir = executable_dir()?;
    let config = resolve_config(args, &base_dir);

    let report = Converter::new(config).run().inspect_err(|e| {
        print!("{}", format_warnings(e.warnings()));
    })?;

    println!("{}", format_report(&report));
    Ok(report)
}
