//! Engine error types.

use std::io;

use actlog_sink::SinkError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The activity-log source file could not be opened.
    #[error("cannot open activity log '{path}': {source}")]
    Source {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A source row could not be decoded as TSV.
    #[error("failed to decode source row: {0}")]
    Decode(#[from] csv::Error),

    /// The ip-location reference table could not be read.
    #[error("cannot read ip-location table '{path}': {source}")]
    GeoTable {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// The destination refused a write at the transport level.
    #[error(transparent)]
    Sink(#[from] SinkError),
}
