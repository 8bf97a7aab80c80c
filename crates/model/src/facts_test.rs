//! Tests for fact records and their table bindings

use crate::facts::{
    ActivityFact, FactRecord, GeoFact, GeoRecord, PinFact, SearchFact,
};
use crate::value::SqlValue;

#[test]
fn test_activity_fact_values_match_columns() {
    let fact = ActivityFact {
        row_id: 42,
        actor: "actor1".into(),
        ip: "1.2.3.4".into(),
        caller: "find_search".into(),
        action: "search".into(),
        created_at: "2020-01-01 00:00:00".into(),
        updated_at: "2020-01-01 00:00:01".into(),
    };

    let values = fact.values();
    assert_eq!(values.len(), ActivityFact::COLUMNS.len());
    assert_eq!(values[0], SqlValue::Int(42));
    assert_eq!(values[3], SqlValue::Text("find_search".into()));
    assert_eq!(ActivityFact::TABLE, "Activities");
}

#[test]
fn test_pin_fact_binding() {
    let fact = PinFact {
        row_id: 1,
        term_id: 1156,
        course_id: 208582,
    };

    assert_eq!(PinFact::TABLE, "ContextPins");
    assert_eq!(PinFact::COLUMNS, &["row_id", "quarter_id", "crs_id"]);
    assert_eq!(
        fact.values(),
        vec![SqlValue::Int(1), SqlValue::Int(1156), SqlValue::Int(208582)]
    );
}

#[test]
fn test_search_fact_null_results() {
    let fact = SearchFact {
        row_id: 5,
        search_term: "cs 106a".into(),
        course_results: None,
        instructor_results: None,
    };

    let values = fact.values();
    assert_eq!(values.len(), SearchFact::COLUMNS.len());
    assert!(values[2].is_null());
    assert!(values[3].is_null());
}

#[test]
fn test_geo_unknown_sentinel() {
    let unknown = GeoRecord::unknown();
    assert_eq!(unknown.country_code, "--");
    assert_eq!(unknown.country, "Country-Unknown");
    assert_eq!(unknown.country_phone_code, "-1");
    assert_eq!(unknown.area_phone_code, "-1");

    let fact = GeoFact {
        row_id: 9,
        location: unknown,
    };
    // row_id plus the full ten-field location tuple.
    assert_eq!(fact.values().len(), 11);
    assert_eq!(GeoFact::COLUMNS.len(), 11);
}
