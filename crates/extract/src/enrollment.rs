//! Enrollment-history extraction from the environment payload
//!
//! Same two-era strategy as the pin extractor. Early format is a flat
//! bracketed list of course ids:
//!
//! ```text
//! course_history_ids:[102794, 105644, 105645, 105649]
//! ```
//!
//! The later format is a list of `#<Enrollment ...>` dumps from which
//! only the `CRSE_ID` field is wanted:
//!
//! ```text
//! "registered_courses"=>[#<Enrollment STRM:nil, ... CRSE_ID: 156872, ...>, ...]
//! ```

use std::sync::LazyLock;

use regex::bytes::Regex;

use crate::pins::parse_u32;

static HISTORY_EARLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"course_history_ids:\[([^\]]*)\]").unwrap());

static HISTORY_LATE_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"registered_courses"=>([^\]]*\])"#).unwrap());

static COURSE_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"CRSE_ID: ([0-9]{6})").unwrap());

static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Extract historical course ids, order preserved
///
/// Empty when neither format matches.
pub fn extract_enrollment_history(environment: &[u8]) -> Vec<u32> {
    if let Some(caps) = HISTORY_EARLY.captures(environment) {
        return INTEGER
            .find_iter(&caps[1])
            .filter_map(|m| parse_u32(m.as_bytes()))
            .collect();
    }
    if let Some(caps) = HISTORY_LATE_LIST.captures(environment) {
        return COURSE_ID
            .captures_iter(&caps[1])
            .filter_map(|c| parse_u32(&c[1]))
            .collect();
    }
    Vec::new()
}

#[cfg(test)]
#[path = "enrollment_test.rs"]
mod enrollment_test;
