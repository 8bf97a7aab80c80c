//! actlog Sink
//!
//! The relational side of the normalizer: the narrow [`Destination`]
//! contract the core depends on, the [`BatchSink`] flush policy that
//! drains fact batches through it, the MySQL-backed implementation, and
//! the table/index bootstrap.
//!
//! # Design
//!
//! - Everything above [`Destination`] is driver-agnostic; the core only
//!   ever sees `bulk_insert`, table existence/creation, truncation, and
//!   index creation.
//! - Delivery is at-least-once-attempted with no retry: after a flush
//!   the batch is gone, whatever the outcome. Row-level insert errors
//!   are logged and accepted as data loss for those rows.
//! - The one warning class the destination emits in bulk ("Data
//!   truncated for column ...", overlong search terms hitting the
//!   declared column width) is counted, not logged, to keep a multi-year
//!   log import from flooding the output.

mod batch_sink;
mod destination;
mod error;
mod memory;
mod mysql_dest;
mod tables;

pub use batch_sink::{BatchSink, TRUNCATION_MARKER};
pub use destination::{Destination, InsertOutcome};
pub use error::{Result, SinkError};
pub use memory::MemoryDestination;
pub use mysql_dest::{MySqlDestination, MySqlSettings};
pub use tables::{create_indexes, ensure_tables, truncate_all, ColumnSpec, TableSpec, ALL_TABLES};
