//! Instructor-handle extraction
//!
//! Profile-lookup rows carry a profile-specifier blob whose handle is
//! the alphabetic token following the first `>` and one separator
//! character, e.g. `#<Sunet >rjohari ...` yields `rjohari`.

use std::sync::LazyLock;

use regex::Regex;

static INSTRUCTOR_HANDLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">.([A-Za-z]+)").unwrap());

/// Extract the instructor handle from a profile-specifier payload
pub fn extract_instructor_handle(spec: &str) -> Option<&str> {
    INSTRUCTOR_HANDLE
        .captures(spec)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::extract_instructor_handle;

    #[test]
    fn test_handle_after_marker() {
        assert_eq!(extract_instructor_handle("#<Sunet > rjohari}"), Some("rjohari"));
    }

    #[test]
    fn test_no_marker_yields_nothing() {
        assert_eq!(extract_instructor_handle("{sunet:}"), None);
    }

    #[test]
    fn test_handle_stops_at_non_alphabetic() {
        assert_eq!(
            extract_instructor_handle("#<Profile >.jdoe42 rest"),
            Some("jdoe")
        );
    }
}
