//! Data model error types

use thiserror::Error;

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur when decoding a log row
#[derive(Debug, Error)]
pub enum ModelError {
    /// The row has no field at the row-id position
    #[error("row has no row-id field")]
    MissingRowId,

    /// The row-id field is not a decimal integer
    #[error("row id '{value}' is not an integer")]
    BadRowId {
        /// Raw text found at the row-id position
        value: String,
    },
}
