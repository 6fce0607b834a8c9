//! disc-zod-converter binary
//!
//! Reads `scan_output/scan_data.json` next to the executable and writes
//! `scan_output/scan_data_ZOD.json` beside it.

use anyhow::Result;
use clap::Parser;
use disc_zod_converter::cli::commands::convert::{ConvertArgs, handle_convert};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "disc-zod-converter")]
#[command(author, version, about = "Convert scanner disc exports to the ZOD optimizer format", long_about = None)]
struct Cli {
    /// Scanner JSON file (default: scan_output/scan_data.json next to the executable)
    #[arg(long)]
    input: Option<PathBuf>,

    /// ZOD JSON file to write (default: scan_output/scan_data_ZOD.json next to the executable)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let args = ConvertArgs {
        input: cli.input,
        output: cli.output,
    };

    let report = handle_convert(&args)?;
    info!(
        "{} converted, {} dropped, {} substats skipped",
        report.converted, report.dropped, report.skipped_substats
    );
    Ok(())
}
