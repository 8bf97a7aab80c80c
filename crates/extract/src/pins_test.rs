//! Tests for context-pin extraction

use crate::pins::extract_context_pins;

#[test]
fn test_early_format() {
    let env = b"Some stuff\t{pinned:{1156:208582, 1162:120904}, course_history_ids:[102794]";
    assert_eq!(
        extract_context_pins(env),
        vec![(1156, 208582), (1162, 120904)]
    );
}

#[test]
fn test_early_format_is_exact_regardless_of_surroundings() {
    let env = b"prefix junk {pinned:{1156:208582, 1162:120904}} trailing junk 9999:111111";
    assert_eq!(
        extract_context_pins(env),
        vec![(1156, 208582), (1162, 120904)]
    );
}

#[test]
fn test_early_format_empty_map() {
    assert!(extract_context_pins(b"{pinned:{}}").is_empty());
}

#[test]
fn test_early_format_malformed_pair_is_skipped() {
    let env = b"{pinned:{1156:208582, garbage, 1162:120904}}";
    assert_eq!(
        extract_context_pins(env),
        vec![(1156, 208582), (1162, 120904)]
    );
}

#[test]
fn test_late_format() {
    let env: &[u8] = br#"foobar "pinned_courses"=>[#<Enrollment STRM: 1214, CLASS_NBR: 25600, CRSE_ID: 204608, CATALOG_NBR: "151", SUBJECT: "ARCHLGY", DESCRIPTION: "Ten Things">, #<Enrollment STRM: 1215, CLASS_NBR: 18259, CRSE_ID: 105670, CATALOG_NBR: "140", SUBJECT: "CS", DESCRIPTION: "Operating Systems">] maybe more"#;
    assert_eq!(
        extract_context_pins(env),
        vec![(1214, 204608), (1215, 105670)]
    );
}

#[test]
fn test_early_format_wins_over_late() {
    let env = br#"{pinned:{1156:208582}} "pinned_courses"=>[#<Enrollment STRM: 1214, CLASS_NBR: 1, CRSE_ID: 204608>]"#;
    assert_eq!(extract_context_pins(env), vec![(1156, 208582)]);
}

#[test]
fn test_no_pins_anywhere() {
    assert!(extract_context_pins(b"Nothing There").is_empty());
}

#[test]
fn test_non_utf8_payload_does_not_panic() {
    let mut env = vec![0xff, 0xfe];
    env.extend_from_slice(b"{pinned:{1156:208582}}");
    assert_eq!(extract_context_pins(&env), vec![(1156, 208582)]);
}
