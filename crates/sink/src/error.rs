//! Sink error types

use thiserror::Error;

/// Result type for sink operations
pub type Result<T> = std::result::Result<T, SinkError>;

/// Errors crossing the destination boundary
///
/// Row-level insert errors and warnings do NOT appear here - they come
/// back inside [`crate::InsertOutcome`] and are handled by policy. An
/// `Err` from a destination means the transport itself failed.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Could not open the database connection
    #[error("failed to connect to database: {0}")]
    Connection(#[source] mysql::Error),

    /// A statement failed for transport reasons (connection dropped, ...)
    #[error("database query failed on '{table}': {source}")]
    Query {
        /// Table the statement targeted
        table: String,
        /// Underlying driver error
        #[source]
        source: mysql::Error,
    },
}
