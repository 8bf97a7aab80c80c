//! actlog - Activity-log normalizer for course-exploration analytics
//!
//! # Usage
//!
//! ```bash
//! # Import a fresh export, wiping any previous load
//! actlog activity_log.tsv.gz --user loader --password --fresh
//!
//! # Restart an interrupted run after the last committed row
//! actlog activity_log.tsv.gz --user loader --password --resume-from 18235001
//! ```

mod run;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// actlog - Activity-log normalizer for course-exploration analytics
#[derive(Parser, Debug)]
#[command(name = "actlog")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Activity-log export to import (TSV, plain or gzipped)
    source: PathBuf,

    /// Path to configuration file
    #[arg(short, long, default_value = "configs/actlog.toml")]
    config: PathBuf,

    /// Database account name (overrides the config file)
    #[arg(short, long)]
    user: Option<String>,

    /// Prompt for the database password instead of reading password_file
    #[arg(short, long)]
    password: bool,

    /// Wipe the destination tables before importing
    #[arg(long, conflicts_with = "resume_from")]
    fresh: bool,

    /// Skip rows with id at or below this value
    #[arg(long, value_name = "ROW_ID")]
    resume_from: Option<u64>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run::run(cli)
}

/// Initialize the tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(filter)
        .init();

    Ok(())
}
