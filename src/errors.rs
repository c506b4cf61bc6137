//! Error types for the symptom advisor
//!
//! Provides the crate-wide error enum with context propagation.
//! Startup errors (dataset, training) are fatal; request errors never are.

use thiserror::Error;

/// Main error type for the advisor
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Dataset file could not be read
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Dataset file could not be parsed
    #[error("CSV parse error: {0}")]
    CsvError(#[from] csv::Error),

    /// Dataset header is missing a required column
    #[error("Dataset is missing required column '{column}'")]
    MissingColumn { column: String },

    /// Dataset contains no training rows
    #[error("Dataset '{path}' contains no training rows")]
    EmptyDataset { path: String },

    /// Training corpus produced no usable vocabulary
    #[error("Training corpus produced an empty vocabulary; cannot fit classifier")]
    EmptyVocabulary,

    /// Classifier produced a label outside the training vocabulary
    #[error("Predicted {field} '{value}' is not in the training vocabulary")]
    UnknownLabel { field: &'static str, value: String },

    /// Report document could not be assembled
    #[error("Report generation failed: {0}")]
    ReportError(String),

    /// Generic errors with context
    #[error("Advisor error: {0}")]
    Generic(String),
}

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Convert anyhow errors to AdvisorError
impl From<anyhow::Error> for AdvisorError {
    fn from(err: anyhow::Error) -> Self {
        AdvisorError::Generic(err.to_string())
    }
}
