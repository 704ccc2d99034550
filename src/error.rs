use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CareError {
    #[error("Invalid {field} {value:?}: {reason}")]
    InvalidInput {
        field: &'static str,
        value: String,
        reason: String,
    },
    #[error("Input stream closed")]
    EndOfInput,
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("Database connection error: {0}")]
    Connection(#[from] diesel::ConnectionError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CareError>;

impl CareError {
    pub fn invalid_input(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CareError::InvalidInput {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Fatal errors end the session; bad input and a closed stdin do not.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CareError::InvalidInput { .. } | CareError::EndOfInput)
    }
}
