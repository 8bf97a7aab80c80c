//! Activity-log source reading.
//!
//! The export is tab-separated, optionally gzip-compressed. Compression is
//! detected by attempting a one-byte gzip read, never by file extension;
//! on a header failure the file is reopened and read as plain text.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::debug;

use crate::error::{EngineError, Result};

/// Open the source file, transparently decompressing when it is gzipped.
pub fn open_source(path: &Path) -> Result<Box<dyn Read>> {
    let open = || -> io::Result<File> { File::open(path) };
    let to_error = |source: io::Error| EngineError::Source {
        path: path.display().to_string(),
        source,
    };

    // A valid gzip member yields at least one byte (or a clean EOF);
    // anything else fails on the magic-number check.
    let mut probe = GzDecoder::new(open().map_err(to_error)?);
    let gzipped = probe.read(&mut [0u8; 1]).is_ok();
    drop(probe);

    let file = open().map_err(to_error)?;
    if gzipped {
        debug!(path = %path.display(), "source is gzip-compressed");
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        debug!(path = %path.display(), "source is plain text");
        Ok(Box::new(file))
    }
}

/// Wrap a source stream in a TSV decoder.
///
/// Quoting is disabled: payload fields contain double quotes that are
/// data, not delimiters. `flexible` is on because a literal tab typed
/// into the search box splits the key-parameter field and widens the
/// record. The first line is a header and is skipped.
pub fn rows<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(source)
}

#[cfg(test)]
#[path = "reader_test.rs"]
mod reader_test;
