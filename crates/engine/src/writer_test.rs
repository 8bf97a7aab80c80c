use actlog_model::{ActivityFact, EnrollmentHistoryFact, PinActionFact, SqlValue};
use actlog_sink::MemoryDestination;

use super::FactWriter;

fn activity(row_id: u64) -> ActivityFact {
    ActivityFact {
        row_id,
        actor: "u1".to_owned(),
        ip: "171.64.0.1".to_owned(),
        caller: "index".to_owned(),
        action: "show_index_page".to_owned(),
        created_at: "2016-01-04 10:00:00".to_owned(),
        updated_at: "2016-01-04 10:00:00".to_owned(),
    }
}

#[test]
fn test_batch_flushes_exactly_at_capacity() {
    let mut writer = FactWriter::new(MemoryDestination::new(), 3, 3);

    writer.activity(activity(1)).unwrap();
    writer.activity(activity(2)).unwrap();
    assert_eq!(writer.destination_mut().bulk_insert_calls(), 0);

    writer.activity(activity(3)).unwrap();
    assert_eq!(writer.destination_mut().bulk_insert_calls(), 1);
    assert_eq!(writer.destination_mut().rows("Activities").len(), 3);
}

#[test]
fn test_append_after_flush_is_not_lost() {
    let mut writer = FactWriter::new(MemoryDestination::new(), 2, 2);
    for id in 1..=5 {
        writer.activity(activity(id)).unwrap();
    }
    writer.flush_all().unwrap();

    let dest = writer.into_destination();
    let ids: Vec<&SqlValue> = dest.rows("Activities").iter().map(|row| &row[0]).collect();
    assert_eq!(
        ids,
        vec![
            &SqlValue::Int(1),
            &SqlValue::Int(2),
            &SqlValue::Int(3),
            &SqlValue::Int(4),
            &SqlValue::Int(5),
        ]
    );
}

#[test]
fn test_enrollment_burst_stays_in_one_flush() {
    let mut writer = FactWriter::new(MemoryDestination::new(), 3, 3);
    let burst = (0..5).map(|i| EnrollmentHistoryFact {
        row_id: 9,
        course_id: 100_000 + i,
    });
    writer.enrollment_history(burst).unwrap();

    let dest = writer.destination_mut();
    assert_eq!(dest.bulk_insert_calls(), 1);
    assert_eq!(dest.rows("EnrollmentHist").len(), 5);
}

#[test]
fn test_small_capacity_applies_to_low_volume_tables() {
    let mut writer = FactWriter::new(MemoryDestination::new(), 100, 1);
    writer
        .pin(PinActionFact {
            row_id: 1,
            course_id: 204_608,
        })
        .unwrap();
    assert_eq!(writer.destination_mut().rows("Pins").len(), 1);

    writer.activity(activity(2)).unwrap();
    assert!(writer.destination_mut().rows("Activities").is_empty());
}

#[test]
fn test_flush_all_skips_empty_batches() {
    let mut writer = FactWriter::new(MemoryDestination::new(), 10, 10);
    writer.activity(activity(1)).unwrap();
    writer.flush_all().unwrap();

    // Only the activities batch held anything; the other eight are no-ops.
    assert_eq!(writer.destination_mut().bulk_insert_calls(), 1);
}
