use actlog_model::LogRow;

use super::{is_typing, SearchSessionTracker};

fn typing_row(row_id: u64, actor: &str, term: &str, output: &str) -> LogRow {
    LogRow {
        row_id,
        actor: actor.to_owned(),
        ip: "171.64.0.1".to_owned(),
        caller: "find_search".to_owned(),
        action: "search".to_owned(),
        key_parameter: format!("{{search_term_accumulator:{term}}}"),
        environment: b"{}".to_vec(),
        output: output.to_owned(),
        browser: "Mozilla/5.0".to_owned(),
        created_at: "2016-01-04 10:00:00".to_owned(),
        updated_at: "2016-01-04 10:00:00".to_owned(),
    }
}

#[test]
fn test_typing_criteria_require_caller_and_action() {
    let mut row = typing_row(1, "u1", "c", "NULL");
    assert!(is_typing(&row));

    row.caller = "get_course_info".to_owned();
    assert!(!is_typing(&row));

    row.caller = "detailed_search".to_owned();
    row.action = "select".to_owned();
    assert!(!is_typing(&row));

    row.action = "search_query".to_owned();
    assert!(is_typing(&row));
}

#[test]
fn test_session_keeps_anchor_and_last_term() {
    let mut tracker = SearchSessionTracker::new();
    tracker.feed(&typing_row(10, "u1", "c", "NULL"));
    tracker.feed(&typing_row(11, "u1", "cs", "NULL"));
    tracker.feed(&typing_row(12, "u1", "cs 1", "NULL"));

    let session = tracker.close("u1").unwrap();
    let (activity, search) = session.commit();

    assert_eq!(activity.row_id, 10);
    assert_eq!(activity.created_at, "2016-01-04 10:00:00");
    assert_eq!(search.row_id, 10);
    assert_eq!(search.search_term, "cs 1");
    assert_eq!(search.course_results, None);
    assert_eq!(search.instructor_results, None);
}

#[test]
fn test_last_non_null_output_wins() {
    let mut tracker = SearchSessionTracker::new();
    tracker.feed(&typing_row(20, "u1", "c", "{results:[215594, 215597]}"));
    tracker.feed(&typing_row(21, "u1", "cs", "NULL"));

    let (_, search) = tracker.close("u1").unwrap().commit();
    assert_eq!(search.course_results.as_deref(), Some("[215594, 215597]"));
}

#[test]
fn test_sessions_are_per_actor() {
    let mut tracker = SearchSessionTracker::new();
    tracker.feed(&typing_row(30, "u1", "math", "NULL"));
    tracker.feed(&typing_row(31, "u2", "bio", "NULL"));

    assert!(tracker.is_open("u1"));
    assert!(tracker.is_open("u2"));

    let (_, search) = tracker.close("u1").unwrap().commit();
    assert_eq!(search.search_term, "math");
    assert!(tracker.is_open("u2"));
}

#[test]
fn test_close_is_idempotent() {
    let mut tracker = SearchSessionTracker::new();
    tracker.feed(&typing_row(40, "u1", "c", "NULL"));

    assert!(tracker.close("u1").is_some());
    assert!(tracker.close("u1").is_none());
    assert!(tracker.close("nobody").is_none());
}

#[test]
fn test_drain_empties_the_map() {
    let mut tracker = SearchSessionTracker::new();
    tracker.feed(&typing_row(50, "u1", "a", "NULL"));
    tracker.feed(&typing_row(51, "u2", "b", "NULL"));

    let drained = tracker.drain();
    assert_eq!(drained.len(), 2);
    assert_eq!(tracker.open_count(), 0);
}

#[test]
fn test_close_stale_leaves_fresh_sessions_open() {
    let mut tracker = SearchSessionTracker::new();

    let mut old = typing_row(60, "u1", "old", "NULL");
    old.created_at = "2016-01-04 09:00:00".to_owned();
    tracker.feed(&old);
    tracker.feed(&typing_row(61, "u2", "fresh", "NULL"));

    let closed = tracker.close_stale("2016-01-04 10:00:30", 300);
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0].actor, "u1");
    assert!(tracker.is_open("u2"));
}

#[test]
fn test_close_stale_treats_unparseable_timestamps_as_stale() {
    let mut tracker = SearchSessionTracker::new();
    let mut row = typing_row(70, "u1", "c", "NULL");
    row.created_at = "not a timestamp".to_owned();
    tracker.feed(&row);

    let closed = tracker.close_stale("2016-01-04 10:00:00", 300);
    assert_eq!(closed.len(), 1);
}
