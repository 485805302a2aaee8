//! Error types for Diagnostic Triage.

use thiserror::Error;

/// Result type alias for Diagnostic Triage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Diagnostic Triage.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid disease registry: {0}")]
    InvalidRegistry(String),

    #[error("invalid symptom model: {0}")]
    InvalidModel(String),

    // Validation errors (20-29)
    #[error("{name} must be between 0 and 1 (inclusive). Got {value}.")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("testResult must be either \"positive\" or \"negative\". Got {0:?}.")]
    InvalidTestResult(String),

    #[error("disease not found: {name}")]
    UnknownDisease { name: String },

    #[error("symptom list is empty")]
    NoSymptoms,

    // Inference errors (30-39)
    #[error("inference failed: {0}")]
    Inference(String),

    #[error("posterior denominator is zero")]
    DegenerateDenominator,

    // Recommendation errors (40-49)
    #[error("recommendation generation failed: {0}")]
    Recommendation(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Server errors (70-79)
    #[error("server error: {0}")]
    Server(String),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used for detailed error reporting in JSON output.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidRegistry(_) => 11,
            Error::InvalidModel(_) => 12,
            Error::ProbabilityOutOfRange { .. } => 20,
            Error::InvalidTestResult(_) => 21,
            Error::UnknownDisease { .. } => 22,
            Error::NoSymptoms => 23,
            Error::Inference(_) => 30,
            Error::DegenerateDenominator => 31,
            Error::Recommendation(_) => 40,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
            Error::Server(_) => 70,
        }
    }

    /// True for errors caused by bad caller input rather than engine state.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::ProbabilityOutOfRange { .. }
                | Error::InvalidTestResult(_)
                | Error::UnknownDisease { .. }
                | Error::NoSymptoms
                | Error::DegenerateDenominator
        )
    }
}
