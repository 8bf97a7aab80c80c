//! Top-level ingestion loop.
//!
//! Reads decoded rows from the source, feeds the dispatcher, drains open
//! sessions at end-of-stream, flushes every batch, and reports what
//! happened. One row is fully classified and buffered before the next is
//! read; the run is resumable only through the `resume_from` pre-filter.

use std::path::Path;
use std::time::{Duration, Instant};

use indicatif::ProgressBar;
use tracing::{error, info};

use actlog_model::LogRow;
use actlog_sink::Destination;

use crate::dispatch::RowDispatcher;
use crate::error::Result;
use crate::reader;
use crate::writer::FactWriter;

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Default, Clone, Copy)]
pub struct IngestOptions {
    /// Skip rows whose id is at or below this value. Used to restart an
    /// interrupted run from its last committed row id.
    pub resume_from: Option<u64>,
}

/// What a completed run processed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows dispatched (skipped and dropped rows excluded).
    pub rows_processed: u64,
    /// Id of the last row dispatched, for a later `resume_from`.
    pub last_row_id: Option<u64>,
    /// Running total of value-truncation warnings from the sink.
    pub truncated_values: u64,
}

/// Run the whole ingestion over one source file.
pub fn run<D: Destination>(
    path: &Path,
    dispatcher: &mut RowDispatcher,
    writer: &mut FactWriter<D>,
    options: IngestOptions,
) -> Result<RunSummary> {
    let source = reader::open_source(path)?;
    let mut records = reader::rows(source);

    let heartbeat = ProgressBar::new_spinner();
    let mut last_beat = Instant::now();

    let mut summary = RunSummary::default();
    for record in records.byte_records() {
        let record = record?;
        let fields: Vec<&[u8]> = record.iter().collect();

        let row = match LogRow::from_fields(&fields) {
            Ok(row) => row,
            Err(err) => {
                error!(%err, "skipping undecodable row");
                continue;
            }
        };

        if let Some(floor) = options.resume_from {
            if row.row_id <= floor {
                continue;
            }
        }
        if row.has_no_actor() {
            continue;
        }

        dispatcher.dispatch(&row, writer)?;
        summary.rows_processed += 1;
        summary.last_row_id = Some(row.row_id);

        if last_beat.elapsed() >= HEARTBEAT_INTERVAL {
            heartbeat.set_message(format!("At record {}", row.row_id));
            heartbeat.tick();
            last_beat = Instant::now();
        }
    }

    dispatcher.finish(writer)?;
    writer.flush_all()?;
    heartbeat.finish_and_clear();

    summary.truncated_values = writer.truncated_values();
    info!(
        rows = summary.rows_processed,
        truncated_values = summary.truncated_values,
        "ingestion finished"
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
