//! Error types for conversion runs

use super::types::ConversionWarning;
use crate::export::ExportError;
use crate::import::ImportError;
use thiserror::Error;

/// Fatal conversion errors
///
/// Unmappable discs and substats are not errors; they show up as
/// [`ConversionWarning`]s in the report.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input missing, unreadable, or not a scanner document. Nothing was written.
    #[error("Input error: {0}")]
    Input(#[from] ImportError),

    /// Output could not be written. The conversion itself had completed, and
    /// its warnings are kept for reporting.
    #[error("Output error: {source}")]
    Output {
        #[source]
        source: ExportError,
        warnings: Vec<ConversionWarning>,
    },
}

impl ConvertError {
    /// Warnings raised before the run failed
    pub fn warnings(&self) -> &[ConversionWarning] {
        match self {
            ConvertError::Input(_) => &[],
            ConvertError::Output { warnings, .. } => warnings,
        }
    }
}

/// Result type for conversion runs
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConvertError::from(ImportError::ParseError("expected array".to_string()));
        assert!(err.to_string().starts_with("Input error"));
        assert!(err.to_string().contains("expected array"));
        assert!(err.warnings().is_empty());

        let err = ConvertError::Output {
            source: ExportError::SerializationError("boom".to_string()),
            warnings: vec![ConversionWarning::UnknownSubstat("Impact".to_string())],
        };
        assert!(err.to_string().starts_with("Output error"));
        assert_eq!(err.warnings().len(), 1);
    }
}
