//! Error types for mcq-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while reading or writing MCQ JSON.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("entry {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("failed to serialize records: {0}")]
    Serialize(String),
}
