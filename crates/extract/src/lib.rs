//! actlog Pattern Library
//!
//! Format-specific extractors that pull structured facts out of the
//! activity log's free-text payloads. The payload notation changed
//! several times over the logging years (JSON-ish, Ruby-object dumps,
//! ad-hoc `key:value` text), so each semantic target carries an ordered
//! list of format matchers: recognizers are tried in fixed priority
//! order and the first one that fires wins.
//!
//! # Design
//!
//! - Environment payloads are matched as raw bytes (`regex::bytes`);
//!   non-UTF-8 content must never abort a row. All anchors are ASCII.
//! - A pattern miss is not an error: the extractor returns nothing and
//!   the corresponding fact is simply not emitted for that row.
//! - Numeric captures are plain decimal integers; anything else inside a
//!   matched list is logged and skipped.

mod course;
mod enrollment;
mod error;
mod instructor;
mod pins;
mod search;

pub use course::{extract_course_select, CourseNameTable};
pub use enrollment::extract_enrollment_history;
pub use error::{ExtractError, Result};
pub use instructor::extract_instructor_handle;
pub use pins::extract_context_pins;
pub use search::{extract_search_term, parse_search_results, SearchResults};
