//! Tests for enrollment-history extraction

use crate::enrollment::extract_enrollment_history;

#[test]
fn test_early_format_order_preserved() {
    let env = b"stuff course_history_ids:[102794, 105644, 105645, 105649] more";
    assert_eq!(
        extract_enrollment_history(env),
        vec![102794, 105644, 105645, 105649]
    );
}

#[test]
fn test_early_format_without_spaces() {
    let env = b"course_history_ids:[123,456]";
    assert_eq!(extract_enrollment_history(env), vec![123, 456]);
}

#[test]
fn test_early_format_empty_list() {
    assert!(extract_enrollment_history(b"course_history_ids:[]").is_empty());
}

#[test]
fn test_late_format() {
    let env: &[u8] = br#""registered_courses"=>[#<Enrollment STRM:nil, CLASS_NBR: 1, CRSE_ID: 156872, SUBJECT: "CS">, #<Enrollment STRM:nil, CRSE_ID: 102794>]"#;
    assert_eq!(extract_enrollment_history(env), vec![156872, 102794]);
}

#[test]
fn test_no_history() {
    assert!(extract_enrollment_history(b"{pinned:{1156:208582}}").is_empty());
}
