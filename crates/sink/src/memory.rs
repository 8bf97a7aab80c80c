//! In-memory destination for tests
//!
//! Records every call so dispatch and flush behavior can be asserted
//! without a database. Row-level errors and warnings for the NEXT bulk
//! insert can be queued to exercise the flush policy.

use std::collections::HashMap;

use actlog_model::SqlValue;

use crate::destination::{Destination, InsertOutcome};
use crate::error::Result;
use crate::tables::TableSpec;

/// One recorded table's contents
#[derive(Debug, Clone, Default)]
pub struct StoredTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<SqlValue>>,
}

/// Recording [`Destination`] backed by hash maps
#[derive(Debug, Default)]
pub struct MemoryDestination {
    tables: HashMap<String, StoredTable>,
    indexes: Vec<(String, String, String)>,
    queued_errors: Vec<String>,
    queued_warnings: Vec<String>,
    bulk_insert_calls: u64,
}

impl MemoryDestination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a row-level error for the next bulk insert
    pub fn queue_error(&mut self, message: impl Into<String>) {
        self.queued_errors.push(message.into());
    }

    /// Queue a warning for the next bulk insert
    pub fn queue_warning(&mut self, message: impl Into<String>) {
        self.queued_warnings.push(message.into());
    }

    /// Rows stored for a table (empty slice when the table is unknown)
    pub fn rows(&self, table: &str) -> &[Vec<SqlValue>] {
        self.tables.get(table).map(|t| t.rows.as_slice()).unwrap_or(&[])
    }

    /// Indexes created so far, as (index, table, column)
    pub fn indexes(&self) -> &[(String, String, String)] {
        &self.indexes
    }

    /// Number of bulk-insert calls made
    pub fn bulk_insert_calls(&self) -> u64 {
        self.bulk_insert_calls
    }
}

impl Destination for MemoryDestination {
    fn bulk_insert(
        &mut self,
        table: &str,
        columns: &[&str],
        rows: Vec<Vec<SqlValue>>,
    ) -> Result<InsertOutcome> {
        self.bulk_insert_calls += 1;
        let stored = self.tables.entry(table.to_owned()).or_default();
        if stored.columns.is_empty() {
            stored.columns = columns.iter().map(|c| (*c).to_owned()).collect();
        }
        stored.rows.extend(rows);
        Ok(InsertOutcome {
            errors: std::mem::take(&mut self.queued_errors),
            warnings: std::mem::take(&mut self.queued_warnings),
        })
    }

    fn create_table(&mut self, spec: &TableSpec) -> Result<()> {
        let stored = self.tables.entry(spec.name.to_owned()).or_default();
        stored.columns = spec.columns.iter().map(|c| c.name.to_owned()).collect();
        Ok(())
    }

    fn table_exists(&mut self, table: &str) -> Result<bool> {
        Ok(self.tables.contains_key(table))
    }

    fn truncate_table(&mut self, table: &str) -> Result<()> {
        if let Some(stored) = self.tables.get_mut(table) {
            stored.rows.clear();
        }
        Ok(())
    }

    fn create_index_if_absent(&mut self, index: &str, table: &str, column: &str) -> Result<()> {
        let key = (index.to_owned(), table.to_owned(), column.to_owned());
        if !self.indexes.iter().any(|i| i.1 == key.1 && i.2 == key.2) {
            self.indexes.push(key);
        }
        Ok(())
    }

    fn max_row_id(&mut self, table: &str) -> Result<Option<u64>> {
        Ok(self
            .tables
            .get(table)
            .into_iter()
            .flat_map(|t| t.rows.iter())
            .filter_map(|row| match row.first() {
                Some(SqlValue::Int(id)) => Some(*id as u64),
                _ => None,
            })
            .max())
    }
}
