//! Destination - the narrow relational contract
//!
//! The core depends only on this trait, never on a wire protocol. A
//! destination may accept a bulk insert while still reporting row-level
//! errors and warnings; those come back in [`InsertOutcome`], and the
//! flush policy in [`crate::BatchSink`] decides what to do with them.

use actlog_model::SqlValue;

use crate::error::Result;
use crate::tables::TableSpec;

/// Row-level results of one bulk insert
#[derive(Debug, Clone, Default)]
pub struct InsertOutcome {
    /// Rows the destination rejected (lost; not retried)
    pub errors: Vec<String>,
    /// Warning messages the destination raised while accepting rows
    pub warnings: Vec<String>,
}

impl InsertOutcome {
    /// An outcome with neither errors nor warnings
    pub fn clean() -> Self {
        Self::default()
    }
}

/// Minimal relational destination surface
pub trait Destination {
    /// Write all rows in one bulk call
    ///
    /// `rows` are positional values matching `columns`. Row-level
    /// failures are reported in the outcome, not as `Err`.
    fn bulk_insert(
        &mut self,
        table: &str,
        columns: &[&str],
        rows: Vec<Vec<SqlValue>>,
    ) -> Result<InsertOutcome>;

    /// Create a table from its static spec
    fn create_table(&mut self, spec: &TableSpec) -> Result<()>;

    /// Whether a table already exists
    fn table_exists(&mut self, table: &str) -> Result<bool>;

    /// Remove all rows from a table
    fn truncate_table(&mut self, table: &str) -> Result<()>;

    /// Create an index unless the column is already indexed (under any name)
    fn create_index_if_absent(&mut self, index: &str, table: &str, column: &str) -> Result<()>;

    /// Largest committed `row_id` in a table, if any rows exist
    ///
    /// Used to resume an interrupted run from the last committed row.
    fn max_row_id(&mut self, table: &str) -> Result<Option<u64>>;
}
