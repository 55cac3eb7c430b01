//! Error type shared by every algorithm and interactive program in the crate.

use thiserror::Error;

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading input or running an algorithm on it.
#[derive(Debug, Error)]
pub enum Error {
    /// Structurally invalid input (mismatched lengths, negative values, undecodable bits).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A prompt expected a number but the line did not parse as one.
    #[error("expected a number for {field}, got {value:?}")]
    NonNumeric { field: String, value: String },

    /// A size or index outside its allowed range.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// An item with zero weight has no value/weight ratio.
    #[error("item {index} has zero weight")]
    ZeroWeight { index: usize },

    /// Nothing to work on: empty text, or input ended while a prompt was waiting.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// A fixed-width result does not fit its integer type.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Error::InvalidDimension(msg.into())
    }

    pub fn empty_input(msg: impl Into<String>) -> Self {
        Error::EmptyInput(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Error::Overflow(msg.into())
    }

    pub fn non_numeric(field: impl Into<String>, value: impl Into<String>) -> Self {
        Error::NonNumeric {
            field: field.into(),
            value: value.into(),
        }
    }
}
