//! Context-pin extraction from the environment payload
//!
//! Two pin-list formats coexist in the log. The early format (2016-2017)
//! is a flat `term:course` map:
//!
//! ```text
//! ...{pinned:{1156:208582, 1162:120904}, ...
//! ```
//!
//! The later format is a Ruby-object dump, extracted in two phases:
//! isolate the bracketed list, then pull `STRM`/`CRSE_ID` pairs out of
//! the `#<Enrollment ...>` entries:
//!
//! ```text
//! "pinned_courses"=>[#<Enrollment STRM: 1214, CLASS_NBR: 25600,
//!     CRSE_ID: 204608, CATALOG_NBR: "151", SUBJECT: "ARCHLGY", ...>, ...]
//! ```
//!
//! The early format is tried first; the first format that matches wins.

use std::sync::LazyLock;

use regex::bytes::Regex;
use tracing::warn;

static PINNED_EARLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"pinned:\{([^}]*)\}").unwrap());

static PINNED_LATE_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"pinned_courses"=>\[([^\]]*)\]"#).unwrap());

static PINNED_LATE_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"STRM: ([0-9]{4}), CLASS_NBR: [^,]*, CRSE_ID: ([0-9]{6})").unwrap()
});

/// Extract `(term_id, course_id)` pairs from the pinned-courses context
///
/// Returns an empty vector when neither format matches. Malformed
/// `term:course` pairs inside a matched early-format list are logged
/// and skipped.
pub fn extract_context_pins(environment: &[u8]) -> Vec<(u32, u32)> {
    if let Some(caps) = PINNED_EARLY.captures(environment) {
        return parse_early_pairs(&caps[1]);
    }
    if let Some(caps) = PINNED_LATE_LIST.captures(environment) {
        return PINNED_LATE_PAIR
            .captures_iter(&caps[1])
            .filter_map(|pair| Some((parse_u32(&pair[1])?, parse_u32(&pair[2])?)))
            .collect();
    }
    Vec::new()
}

/// Parse the early variety: `1156:208582, 1162:120904`
fn parse_early_pairs(list: &[u8]) -> Vec<(u32, u32)> {
    let mut pins = Vec::new();
    for pair in list.split(|&b| b == b',') {
        if pair.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        let mut halves = pair.splitn(2, |&b| b == b':');
        let parsed = match (halves.next(), halves.next()) {
            (Some(term), Some(course)) => parse_u32(term).zip(parse_u32(course)),
            _ => None,
        };
        match parsed {
            Some(pin) => pins.push(pin),
            None => warn!(
                pair = %String::from_utf8_lossy(pair),
                "could not split term from course id in pin list"
            ),
        }
    }
    pins
}

pub(crate) fn parse_u32(bytes: &[u8]) -> Option<u32> {
    std::str::from_utf8(bytes).ok()?.trim().parse().ok()
}

#[cfg(test)]
#[path = "pins_test.rs"]
mod pins_test;
