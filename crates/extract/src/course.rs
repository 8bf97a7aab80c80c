//! Course-selection extraction and the course-name lookup table
//!
//! Selection payloads come in two shapes, tried in order:
//!
//! ```text
//! {selected_course:111846, name:BIO42}                       direct id
//! {controller:pages, action:index, name:STATS50, quarter:1172}   by name
//! ```
//!
//! The by-name shape resolves through a static `course_name -> course_id`
//! table loaded once at startup. Names are normalized by stripping
//! spaces and uppercasing, so `STATS 50` and `stats50` hit the same
//! entry. A lookup miss resolves to the sentinel id 0 - that is data
//! worth keeping, not an error.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ExtractError, Result};

static DIRECT_COURSE_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":([0-9]{6})").unwrap());

static COURSE_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"name:([^,}]*)").unwrap());

/// Static mapping from normalized course name to course id
#[derive(Debug, Clone, Default)]
pub struct CourseNameTable {
    names: HashMap<String, u32>,
}

impl CourseNameTable {
    /// Load the table from a two-column CSV (`course_name, course_id`)
    pub fn load(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        let file = std::fs::File::open(path).map_err(|source| ExtractError::TableIo {
            path: display.clone(),
            source,
        })?;
        let mut reader = csv::ReaderBuilder::new().has_headers(false).from_reader(file);

        let mut names = HashMap::new();
        for record in reader.records() {
            let record = record.map_err(|e| ExtractError::TableFormat {
                path: display.clone(),
                source: e,
            })?;
            let (Some(name), Some(id)) = (record.get(0), record.get(1)) else {
                continue;
            };
            let id: u32 = id.trim().parse().map_err(|_| ExtractError::BadCourseId {
                name: name.to_owned(),
                id: id.to_owned(),
            })?;
            names.insert(normalize(name), id);
        }
        Ok(Self { names })
    }

    /// Build a table from `(name, id)` pairs; names are normalized
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        Self {
            names: pairs
                .into_iter()
                .map(|(name, id)| (normalize(name.as_ref()), id))
                .collect(),
        }
    }

    /// Resolve a course name to its id; 0 on miss
    pub fn resolve(&self, name: &str) -> u32 {
        self.names.get(&normalize(name)).copied().unwrap_or(0)
    }

    /// Number of known course names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Strip spaces and uppercase: `STATS 50` -> `STATS50`
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Resolve the selected course id from a key-parameter payload
///
/// Tries the direct 6-digit id first, then the `name:` form through the
/// lookup table. `None` means the payload carried neither shape and no
/// selection fact should be emitted.
pub fn extract_course_select(key_parameter: &str, table: &CourseNameTable) -> Option<u32> {
    if let Some(caps) = DIRECT_COURSE_ID.captures(key_parameter) {
        // Captured digits always parse.
        return caps[1].parse().ok();
    }
    // The name form: take the last `name:` occurrence, matching the
    // original logs where a leading controller field may also carry one.
    let caps = COURSE_NAME.captures_iter(key_parameter).last()?;
    Some(table.resolve(&caps[1]))
}

#[cfg(test)]
#[path = "course_test.rs"]
mod course_test;
