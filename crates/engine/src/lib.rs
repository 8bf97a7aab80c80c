//! Ingestion engine for the activity-log normalizer.
//!
//! The engine turns a raw TSV export into typed fact rows and hands them to
//! a [`Destination`](actlog_sink::Destination) in fixed-capacity batches.
//! It owns the per-row state machine ([`dispatch::RowDispatcher`]), the
//! per-actor search-session coalescing ([`session::SearchSessionTracker`]),
//! the batching writer ([`writer::FactWriter`]) and the top-level ingestion
//! loop ([`pipeline::run`]).
//!
//! # Design
//!
//! The engine is single threaded on purpose. Rows must be observed in file
//! order for session coalescing and resume offsets to be meaningful, so the
//! loop reads, dispatches and writes from one thread and relies on the
//! destination's bulk insert path for throughput.

pub mod batch;
pub mod dispatch;
pub mod error;
pub mod geo;
pub mod pipeline;
pub mod reader;
pub mod session;
pub mod writer;

pub use batch::Batch;
pub use dispatch::RowDispatcher;
pub use error::{EngineError, Result};
pub use geo::{CsvIpTable, IpLocator, NoLocations};
pub use pipeline::{run, IngestOptions, RunSummary};
pub use session::{SearchSession, SearchSessionTracker};
pub use writer::FactWriter;
