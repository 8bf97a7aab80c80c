//! BatchSink - drain fact batches into a destination
//!
//! One `BatchSink` owns the destination for the whole run. Flushing is
//! fire-and-forget: the rows are handed to the destination in a single
//! bulk call, the outcome is classified, and the caller's batch is
//! already empty. Nothing is retried.

use actlog_model::FactRecord;
use tracing::{debug, error, warn};

use crate::destination::Destination;
use crate::error::Result;

/// Warning-message fragment identifying the truncated-value class
///
/// Counted in a running total instead of logged per occurrence;
/// overlong search terms would otherwise flood the log.
pub const TRUNCATION_MARKER: &str = "Data truncated for column";

/// Flush policy wrapper around a [`Destination`]
pub struct BatchSink<D> {
    dest: D,
    truncated_values: u64,
}

impl<D: Destination> BatchSink<D> {
    /// Wrap a destination
    pub fn new(dest: D) -> Self {
        Self {
            dest,
            truncated_values: 0,
        }
    }

    /// Write one drained batch of facts in a single bulk call
    ///
    /// Row-level errors are logged (those rows are lost by design);
    /// truncation warnings are counted; all other warnings are logged
    /// in full. `Err` only for transport failures.
    pub fn write<T: FactRecord>(&mut self, facts: Vec<T>) -> Result<()> {
        if facts.is_empty() {
            return Ok(());
        }
        let count = facts.len();
        let rows = facts.iter().map(FactRecord::values).collect();
        let outcome = self.dest.bulk_insert(T::TABLE, T::COLUMNS, rows)?;

        for err in &outcome.errors {
            error!(table = T::TABLE, error = %err, "rows rejected by bulk insert");
        }
        for warning in &outcome.warnings {
            if warning.contains(TRUNCATION_MARKER) {
                self.truncated_values += 1;
            } else {
                warn!(table = T::TABLE, warning = %warning, "bulk insert warning");
            }
        }
        debug!(table = T::TABLE, rows = count, "flushed batch");
        Ok(())
    }

    /// Running total of truncated-value warnings, surfaced at run end
    pub fn truncated_values(&self) -> u64 {
        self.truncated_values
    }

    /// Access the wrapped destination
    pub fn destination_mut(&mut self) -> &mut D {
        &mut self.dest
    }

    /// Unwrap the destination
    pub fn into_destination(self) -> D {
        self.dest
    }
}

#[cfg(test)]
#[path = "batch_sink_test.rs"]
mod batch_sink_test;
