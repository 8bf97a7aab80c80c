//! Extraction error types
//!
//! Pattern misses are not errors (extractors return empty results).
//! Errors here are setup-time only: a reference table that cannot be
//! loaded aborts the run before any row is processed.

use std::io;
use thiserror::Error;

/// Result type for extraction setup operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors raised while loading extractor reference data
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Course-name lookup table file could not be read
    #[error("failed to read course-name table '{path}': {source}")]
    TableIo {
        /// Path to the table file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Course-name lookup table file could not be parsed as CSV
    #[error("failed to parse course-name table '{path}': {source}")]
    TableFormat {
        /// Path to the table file
        path: String,
        /// Underlying CSV error
        #[source]
        source: csv::Error,
    },

    /// A course id in the lookup table is not an integer
    #[error("course '{name}' maps to non-numeric id '{id}'")]
    BadCourseId {
        /// Course name as it appears in the table
        name: String,
        /// Offending id text
        id: String,
    },
}
