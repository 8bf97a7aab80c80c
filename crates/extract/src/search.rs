//! Search-term and search-result extraction
//!
//! The typed-so-far term lives in the key-parameter payload:
//!
//! ```text
//! {search_term_accumulator:cs 1}
//! ```
//!
//! The output payload of a search row went through four generations of
//! result formats, tried in this order, first match wins:
//!
//! 1. `{results:[213685, 213686], instructor_results:[Alexei Entin, ...]}`
//! 2. `{augmented_outputs:[{CRSE_ID:118599, STRM:1166, ...}, ...]}`
//! 3. a bare list of 6-digit ids: `{results:[215594, 215597]}`
//! 4. opaque placeholders: `{results:[#<Combo >, #<Combo >]}` - no ids
//!    to extract, mapped to zeros of matching length
//!
//! No match yields no results (the search fact then carries NULLs).

use std::sync::LazyLock;

use regex::Regex;

static SEARCH_TERM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":([^}]*)").unwrap());

static RESULTS_WITH_INSTRUCTORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{results:\[([,0-9\s]*)\], instructor_results:(.*)$").unwrap()
});

static AUGMENTED_COURSE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"CRSE_ID:([0-9]{6})").unwrap());

static SIX_DIGIT_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{6}").unwrap());

static COMBO_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#<Combo >").unwrap());

const AUGMENTED_MARKER: &str = "{augmented_outputs";

/// Structured search results pulled from one output payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    /// Course ids in result order; placeholder-only results are all zeros
    pub courses: Vec<u32>,
    /// Raw instructor-name list text, format 1 only
    pub instructors: Option<String>,
}

impl SearchResults {
    /// Render the course list as sink text: `[213685, 213686]`
    pub fn render_courses(&self) -> String {
        let mut out = String::from("[");
        for (i, id) in self.courses.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&id.to_string());
        }
        out.push(']');
        out
    }
}

/// Extract the search term typed so far
///
/// Everything between the first `:` and the closing `}` (or end of
/// payload). `None` when the payload has no colon at all.
pub fn extract_search_term(key_parameter: &str) -> Option<&str> {
    SEARCH_TERM
        .captures(key_parameter)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse a search-result output payload, trying all four formats
pub fn parse_search_results(output: &str) -> Option<SearchResults> {
    // Format 1: separate course-id and instructor-name lists.
    if let Some(caps) = RESULTS_WITH_INSTRUCTORS.captures(output) {
        let courses = parse_ints(&caps[1]);
        let instructors = trim_instructor_list(&caps[2]).to_owned();
        return Some(SearchResults {
            courses,
            instructors: Some(instructors),
        });
    }

    // Format 2: augmented outputs with embedded CRSE_ID fields.
    if output.starts_with(AUGMENTED_MARKER) {
        let courses: Vec<u32> = AUGMENTED_COURSE_ID
            .captures_iter(output)
            .filter_map(|c| c[1].parse().ok())
            .collect();
        if !courses.is_empty() {
            return Some(SearchResults {
                courses,
                instructors: None,
            });
        }
    }

    // Format 3: bare 6-digit ids anywhere in the payload.
    let courses: Vec<u32> = SIX_DIGIT_ID
        .find_iter(output)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();
    if !courses.is_empty() {
        return Some(SearchResults {
            courses,
            instructors: None,
        });
    }

    // Format 4: placeholder tokens carrying no ids at all.
    let placeholders = COMBO_PLACEHOLDER.find_iter(output).count();
    if placeholders > 0 {
        return Some(SearchResults {
            courses: vec![0; placeholders],
            instructors: None,
        });
    }

    None
}

fn parse_ints(list: &str) -> Vec<u32> {
    list.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

/// `[Alexei Entin, Andrew Endy]}` -> `Alexei Entin, Andrew Endy`
fn trim_instructor_list(raw: &str) -> &str {
    raw.strip_prefix('[')
        .unwrap_or(raw)
        .trim_end_matches('}')
        .trim_end_matches(']')
}

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;
