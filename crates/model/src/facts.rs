//! Fact record types
//!
//! One struct per destination table. Facts are created once by an
//! extractor, buffered, drained into the sink, and never mutated.
//!
//! [`FactRecord`] is the static registration between a fact type and its
//! table: name, column order, and how a fact renders into a row of
//! [`SqlValue`]s. The batching writer and the sink are generic over it.

use crate::value::SqlValue;

/// Static binding between a fact type and its destination table
pub trait FactRecord {
    /// Destination table name
    const TABLE: &'static str;

    /// Column names, in insertion order
    const COLUMNS: &'static [&'static str];

    /// Render this fact as one row of values, matching `COLUMNS`
    fn values(&self) -> Vec<SqlValue>;
}

// =============================================================================
// Activities
// =============================================================================

/// One row per logical user action (a coalesced search counts once)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityFact {
    pub row_id: u64,
    pub actor: String,
    pub ip: String,
    pub caller: String,
    pub action: String,
    pub created_at: String,
    pub updated_at: String,
}

impl FactRecord for ActivityFact {
    const TABLE: &'static str = "Activities";
    const COLUMNS: &'static [&'static str] = &[
        "row_id",
        "student",
        "ip_addr",
        "category",
        "action_nm",
        "created_at",
        "updated_at",
    ];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.row_id.into(),
            self.actor.clone().into(),
            self.ip.clone().into(),
            self.caller.clone().into(),
            self.action.clone().into(),
            self.created_at.clone().into(),
            self.updated_at.clone().into(),
        ]
    }
}

// =============================================================================
// Pins
// =============================================================================

/// A course pinned in the session context of an unrelated action
///
/// `term_id` is the 4-digit academic-term code (STRM).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFact {
    pub row_id: u64,
    pub term_id: u32,
    pub course_id: u32,
}

impl FactRecord for PinFact {
    const TABLE: &'static str = "ContextPins";
    const COLUMNS: &'static [&'static str] = &["row_id", "quarter_id", "crs_id"];

    fn values(&self) -> Vec<SqlValue> {
        vec![self.row_id.into(), self.term_id.into(), self.course_id.into()]
    }
}

/// An explicit pin click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinActionFact {
    pub row_id: u64,
    pub course_id: u32,
}

impl FactRecord for PinActionFact {
    const TABLE: &'static str = "Pins";
    const COLUMNS: &'static [&'static str] = &["row_id", "crs_id"];

    fn values(&self) -> Vec<SqlValue> {
        vec![self.row_id.into(), self.course_id.into()]
    }
}

/// An explicit unpin click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnpinActionFact {
    pub row_id: u64,
    pub course_id: u32,
}

impl FactRecord for UnpinActionFact {
    const TABLE: &'static str = "UnPins";
    const COLUMNS: &'static [&'static str] = &["row_id", "crs_id"];

    fn values(&self) -> Vec<SqlValue> {
        vec![self.row_id.into(), self.course_id.into()]
    }
}

// =============================================================================
// Course selection / enrollment history
// =============================================================================

/// A course a visitor opened for deeper viewing
///
/// `course_id` 0 means the payload named a course the lookup table does
/// not know; that is data, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseSelectFact {
    pub row_id: u64,
    pub course_id: u32,
}

impl FactRecord for CourseSelectFact {
    const TABLE: &'static str = "CrseSelects";
    const COLUMNS: &'static [&'static str] = &["row_id", "crs_id"];

    fn values(&self) -> Vec<SqlValue> {
        vec![self.row_id.into(), self.course_id.into()]
    }
}

/// One historical course from the environment payload's enrollment list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrollmentHistoryFact {
    pub row_id: u64,
    pub course_id: u32,
}

impl FactRecord for EnrollmentHistoryFact {
    const TABLE: &'static str = "EnrollmentHist";
    const COLUMNS: &'static [&'static str] = &["row_id", "crs_id"];

    fn values(&self) -> Vec<SqlValue> {
        vec![self.row_id.into(), self.course_id.into()]
    }
}

// =============================================================================
// Instructor lookups
// =============================================================================

/// A visitor viewed an instructor's profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructorLookupFact {
    pub row_id: u64,
    pub instructor: String,
}

impl FactRecord for InstructorLookupFact {
    const TABLE: &'static str = "InstructorLookups";
    const COLUMNS: &'static [&'static str] = &["row_id", "instructor"];

    fn values(&self) -> Vec<SqlValue> {
        vec![self.row_id.into(), self.instructor.clone().into()]
    }
}

// =============================================================================
// Searches
// =============================================================================

/// One committed (coalesced) course search
///
/// The result fields are only present when the terminal row of the
/// coalesced sequence carried a non-null output payload that one of the
/// result extractors recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFact {
    pub row_id: u64,
    pub search_term: String,
    pub course_results: Option<String>,
    pub instructor_results: Option<String>,
}

impl FactRecord for SearchFact {
    const TABLE: &'static str = "CrseSearches";
    const COLUMNS: &'static [&'static str] =
        &["row_id", "search_term", "crs_res", "instructor_res"];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.row_id.into(),
            self.search_term.clone().into(),
            self.course_results.clone().into(),
            self.instructor_results.clone().into(),
        ]
    }
}

// =============================================================================
// Geolocation
// =============================================================================

/// Location attributes for one IP address
///
/// Produced by the external geolocation collaborator; [`GeoRecord::unknown`]
/// is the documented sentinel substituted on lookup miss so geo emission
/// never branches on absence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoRecord {
    pub country_code: String,
    pub country: String,
    pub region: String,
    pub city: String,
    pub lat: String,
    pub long: String,
    pub postal_code: String,
    pub timezone: String,
    pub country_phone_code: String,
    pub area_phone_code: String,
}

impl GeoRecord {
    /// The fixed "unknown" sentinel tuple used when an IP is not in the table
    pub fn unknown() -> Self {
        Self {
            country_code: "--".into(),
            country: "Country-Unknown".into(),
            region: "State-Unknown".into(),
            city: "City-Unknown".into(),
            lat: "0.0".into(),
            long: "0.0".into(),
            postal_code: "Zip-Unknown".into(),
            timezone: "TZ-Unknown".into(),
            country_phone_code: "-1".into(),
            area_phone_code: "-1".into(),
        }
    }
}

/// Geolocation of one row's source IP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoFact {
    pub row_id: u64,
    pub location: GeoRecord,
}

impl FactRecord for GeoFact {
    const TABLE: &'static str = "IpLocation";
    const COLUMNS: &'static [&'static str] = &[
        "row_id",
        "country_code",
        "country",
        "state",
        "city",
        "lat",
        "longitude",
        "zip",
        "time_zone",
        "country_phone",
        "area_code",
    ];

    fn values(&self) -> Vec<SqlValue> {
        let loc = &self.location;
        vec![
            self.row_id.into(),
            loc.country_code.clone().into(),
            loc.country.clone().into(),
            loc.region.clone().into(),
            loc.city.clone().into(),
            loc.lat.clone().into(),
            loc.long.clone().into(),
            loc.postal_code.clone().into(),
            loc.timezone.clone().into(),
            loc.country_phone_code.clone().into(),
            loc.area_phone_code.clone().into(),
        ]
    }
}

#[cfg(test)]
#[path = "facts_test.rs"]
mod facts_test;
