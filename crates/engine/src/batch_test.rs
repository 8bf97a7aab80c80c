use super::Batch;

#[test]
fn test_batch_reports_full_at_capacity() {
    let mut batch = Batch::new("Pins", 3);
    batch.append(1u32);
    batch.append(2);
    assert!(!batch.is_full());
    batch.append(3);
    assert!(batch.is_full());
}

#[test]
fn test_extend_may_overshoot_capacity() {
    let mut batch = Batch::new("EnrollmentHist", 2);
    batch.extend([10u32, 20, 30, 40]);
    assert_eq!(batch.len(), 4);
    assert!(batch.is_full());
}

#[test]
fn test_drain_empties_and_preserves_order() {
    let mut batch = Batch::new("Activities", 8);
    batch.extend(["a", "b", "c"]);
    assert_eq!(batch.drain(), vec!["a", "b", "c"]);
    assert!(batch.is_empty());
    assert!(!batch.is_full());

    batch.append("d");
    assert_eq!(batch.drain(), vec!["d"]);
}
