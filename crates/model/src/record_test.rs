//! Tests for log row decoding

use crate::error::ModelError;
use crate::record::LogRow;

fn fields(parts: &[&str]) -> Vec<Vec<u8>> {
    parts.iter().map(|p| p.as_bytes().to_vec()).collect()
}

fn decode(parts: &[&str]) -> Result<LogRow, ModelError> {
    let owned = fields(parts);
    let refs: Vec<&[u8]> = owned.iter().map(|f| f.as_slice()).collect();
    LogRow::from_fields(&refs)
}

#[test]
fn test_decode_full_row() {
    let row = decode(&[
        "3",
        "abc123",
        "171.66.16.37",
        "get_course_info",
        "view",
        "{selected_course:105670, name:CS140}",
        "{pinned:{}}",
        "NULL",
        "Mozilla/5.0",
        "2015-10-24 07:59:37",
        "2015-10-24 07:59:38",
    ])
    .unwrap();

    assert_eq!(row.row_id, 3);
    assert_eq!(row.actor, "abc123");
    assert_eq!(row.ip, "171.66.16.37");
    assert_eq!(row.caller, "get_course_info");
    assert_eq!(row.action, "view");
    assert_eq!(row.created_at, "2015-10-24 07:59:37");
    assert_eq!(row.updated_at, "2015-10-24 07:59:38");
    assert!(!row.has_output());
    assert!(!row.has_no_actor());
}

#[test]
fn test_timestamps_come_from_last_two_fields() {
    // A tab typed into the search box splits the key parameter and
    // shifts all later columns one to the right.
    let row = decode(&[
        "37153",
        "actor9",
        "10.30.49.129",
        "find_search",
        "search",
        "{search_term:lawgen",
        "}",
        "NULL",
        "{results:[212339]}",
        "Mozilla/5.0",
        "2018-01-05 10:00:00",
        "2018-01-05 10:00:01",
    ])
    .unwrap();

    assert_eq!(row.created_at, "2018-01-05 10:00:00");
    assert_eq!(row.updated_at, "2018-01-05 10:00:01");
}

#[test]
fn test_short_row_decodes_with_empty_fields() {
    let row = decode(&["5", "actor1", "171.66.16.37", "find_search", "search", "{search_term:cs 1}"])
        .unwrap();

    assert_eq!(row.row_id, 5);
    assert_eq!(row.key_parameter, "{search_term:cs 1}");
    assert_eq!(row.output, "");
    assert!(row.environment.is_empty());
    // A truncated record must not promote an earlier field to a
    // timestamp.
    assert_eq!(row.created_at, "");
    assert_eq!(row.updated_at, "");
}

#[test]
fn test_ten_field_row_keeps_positional_timestamps() {
    let row = decode(&[
        "6",
        "actor1",
        "171.66.16.37",
        "index",
        "show_index_page",
        "{}",
        "{}",
        "NULL",
        "Mozilla/5.0",
        "2015-10-24 07:59:37",
    ])
    .unwrap();

    assert_eq!(row.created_at, "2015-10-24 07:59:37");
    assert_eq!(row.updated_at, "");
}

#[test]
fn test_bad_row_id_is_an_error() {
    let err = decode(&["not-a-number", "actor1"]).unwrap_err();
    assert!(matches!(err, ModelError::BadRowId { .. }));
}

#[test]
fn test_empty_row_is_an_error() {
    let refs: Vec<&[u8]> = Vec::new();
    assert!(matches!(
        LogRow::from_fields(&refs),
        Err(ModelError::MissingRowId)
    ));
}

#[test]
fn test_no_actor_sentinel() {
    let row = decode(&["10", "0", "1.2.3.4", "index", "show_index_page", "{}"]).unwrap();
    assert!(row.has_no_actor());
}

#[test]
fn test_non_utf8_environment_survives() {
    let mut owned = fields(&["7", "actor1", "1.2.3.4", "initial_recommendation", "view", "{}"]);
    owned.push(vec![0xff, 0xfe, b'p', b'i', b'n']);
    let refs: Vec<&[u8]> = owned.iter().map(|f| f.as_slice()).collect();

    let row = LogRow::from_fields(&refs).unwrap();
    assert_eq!(row.environment, vec![0xff, 0xfe, b'p', b'i', b'n']);
}
