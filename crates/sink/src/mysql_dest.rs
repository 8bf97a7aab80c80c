//! MySQL-backed destination
//!
//! Synchronous driver to match the single-threaded pipeline. Statements
//! that the server rejects are returned as row-level outcome errors (the
//! batch is lost, the run continues); transport failures are `Err`.

use actlog_model::SqlValue;
use mysql::prelude::Queryable;
use mysql::{Conn, Opts, OptsBuilder, Params, Value};
use tracing::debug;

use crate::destination::{Destination, InsertOutcome};
use crate::error::{Result, SinkError};
use crate::tables::TableSpec;

/// Connection settings for the MySQL destination
#[derive(Debug, Clone)]
pub struct MySqlSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

/// MySQL implementation of the [`Destination`] contract
pub struct MySqlDestination {
    conn: Conn,
}

impl MySqlDestination {
    /// Open a connection; failure here is fatal to the run
    pub fn connect(settings: &MySqlSettings) -> Result<Self> {
        let opts: Opts = OptsBuilder::new()
            .ip_or_hostname(Some(settings.host.as_str()))
            .tcp_port(settings.port)
            .user(Some(settings.user.as_str()))
            .pass(Some(settings.password.as_str()))
            .db_name(Some(settings.database.as_str()))
            .into();
        let conn = Conn::new(opts).map_err(SinkError::Connection)?;
        debug!(host = %settings.host, db = %settings.database, "connected to destination");
        Ok(Self { conn })
    }

    fn query_error(&self, table: &str, source: mysql::Error) -> SinkError {
        SinkError::Query {
            table: table.to_owned(),
            source,
        }
    }

    /// Warning messages raised by the last statement
    fn collect_warnings(&mut self, table: &str) -> Result<Vec<String>> {
        let rows: Vec<(String, u32, String)> = self
            .conn
            .query("SHOW WARNINGS")
            .map_err(|e| self.query_error(table, e))?;
        Ok(rows.into_iter().map(|(_level, _code, message)| message).collect())
    }
}

impl Destination for MySqlDestination {
    fn bulk_insert(
        &mut self,
        table: &str,
        columns: &[&str],
        rows: Vec<Vec<SqlValue>>,
    ) -> Result<InsertOutcome> {
        if rows.is_empty() {
            return Ok(InsertOutcome::clean());
        }

        // All rows go in a single multi-row statement: SHOW WARNINGS only
        // reports the most recent statement, so a per-row loop would drop
        // every warning but the last row's.
        let stmt = insert_statement(table, columns, rows.len());
        let values: Vec<Value> = rows
            .into_iter()
            .flat_map(|row| row.into_iter().map(to_driver_value))
            .collect();
        match self.conn.exec_drop(&stmt, Params::Positional(values)) {
            Ok(()) => Ok(InsertOutcome {
                errors: Vec::new(),
                warnings: self.collect_warnings(table)?,
            }),
            // Server-side rejection: the rows are lost, the run is not.
            Err(mysql::Error::MySqlError(server)) => Ok(InsertOutcome {
                errors: vec![server.to_string()],
                warnings: Vec::new(),
            }),
            Err(other) => Err(self.query_error(table, other)),
        }
    }

    fn create_table(&mut self, spec: &TableSpec) -> Result<()> {
        let mut defs: Vec<String> = spec
            .columns
            .iter()
            .map(|c| format!("{} {}", c.name, c.sql_type))
            .collect();
        if let Some(pk) = spec.primary_key {
            defs.push(format!("PRIMARY KEY({pk})"));
        }
        let ddl = format!(
            "CREATE TABLE {} ({}) ENGINE=MyISAM",
            spec.name,
            defs.join(", ")
        );
        self.conn
            .query_drop(ddl)
            .map_err(|e| self.query_error(spec.name, e))
    }

    fn table_exists(&mut self, table: &str) -> Result<bool> {
        let count: Option<u64> = self
            .conn
            .exec_first(
                "SELECT COUNT(*) FROM information_schema.tables \
                 WHERE table_schema = DATABASE() AND table_name = ?",
                (table,),
            )
            .map_err(|e| self.query_error(table, e))?;
        Ok(count.unwrap_or(0) > 0)
    }

    fn truncate_table(&mut self, table: &str) -> Result<()> {
        self.conn
            .query_drop(format!("TRUNCATE TABLE {table}"))
            .map_err(|e| self.query_error(table, e))
    }

    fn create_index_if_absent(&mut self, index: &str, table: &str, column: &str) -> Result<()> {
        // An existing index of any name on the column counts.
        let count: Option<u64> = self
            .conn
            .exec_first(
                "SELECT COUNT(*) FROM information_schema.statistics \
                 WHERE table_schema = DATABASE() AND table_name = ? AND column_name = ?",
                (table, column),
            )
            .map_err(|e| self.query_error(table, e))?;
        if count.unwrap_or(0) == 0 {
            self.conn
                .query_drop(format!("CREATE INDEX {index} ON {table}({column})"))
                .map_err(|e| self.query_error(table, e))?;
        }
        Ok(())
    }

    fn max_row_id(&mut self, table: &str) -> Result<Option<u64>> {
        let max: Option<Option<u64>> = self
            .conn
            .query_first(format!("SELECT MAX(row_id) FROM {table}"))
            .map_err(|e| self.query_error(table, e))?;
        Ok(max.flatten())
    }
}

/// `INSERT INTO t (a, b) VALUES (?, ?), (?, ?), ...` with one
/// placeholder group per row
fn insert_statement(table: &str, columns: &[&str], row_count: usize) -> String {
    let group = format!("({})", vec!["?"; columns.len()].join(", "));
    format!(
        "INSERT INTO {} ({}) VALUES {}",
        table,
        columns.join(", "),
        vec![group.as_str(); row_count].join(", ")
    )
}

fn to_driver_value(value: SqlValue) -> Value {
    match value {
        SqlValue::Int(v) => Value::Int(v),
        SqlValue::Text(v) => Value::Bytes(v.into_bytes()),
        SqlValue::Null => Value::NULL,
    }
}

#[cfg(test)]
mod tests {
    use super::{insert_statement, to_driver_value};
    use actlog_model::SqlValue;
    use mysql::Value;

    #[test]
    fn test_batch_renders_as_one_multi_row_statement() {
        let stmt = insert_statement("Pins", &["row_id", "crs_id"], 3);
        assert_eq!(
            stmt,
            "INSERT INTO Pins (row_id, crs_id) VALUES (?, ?), (?, ?), (?, ?)"
        );
    }

    #[test]
    fn test_single_row_statement() {
        let stmt = insert_statement("InstructorLookups", &["row_id", "instructor"], 1);
        assert_eq!(
            stmt,
            "INSERT INTO InstructorLookups (row_id, instructor) VALUES (?, ?)"
        );
    }

    #[test]
    fn test_value_mapping() {
        assert_eq!(to_driver_value(SqlValue::Int(7)), Value::Int(7));
        assert_eq!(
            to_driver_value(SqlValue::Text("cs 1".into())),
            Value::Bytes(b"cs 1".to_vec())
        );
        assert_eq!(to_driver_value(SqlValue::Null), Value::NULL);
    }
}
