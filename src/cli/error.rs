//! CLI error types

use crate::convert::ConvertError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to locate converter directory: {0}")]
    ExecutableDirError(String),

    #[error(transparent)]
    ConversionError(#[from] ConvertError),
}
