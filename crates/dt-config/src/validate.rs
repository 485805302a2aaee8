//! Validation errors for configuration files.

use thiserror::Error;

/// Errors raised while loading or validating configuration files.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("incompatible schema version: {0}")]
    SchemaVersion(String),

    #[error("semantic error: {0}")]
    Semantic(String),
}

impl From<ValidationError> for dt_common::Error {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::IoError(msg) => dt_common::Error::Config(msg),
            other => dt_common::Error::InvalidRegistry(other.to_string()),
        }
    }
}
