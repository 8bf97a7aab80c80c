//! actlog Data Model
//!
//! Typed representations of the activity log's input and output:
//!
//! - [`LogRow`] - one decoded row of the tab-separated activity log
//! - The fact records ([`ActivityFact`], [`PinFact`], [`SearchFact`], ...)
//!   that the extraction engine produces, one struct per destination table
//! - [`SqlValue`] - the small value model the sink contract speaks
//!
//! Every fact type implements [`FactRecord`], which statically binds it to
//! its destination table name and column order. The sink never needs to
//! know anything else about a fact.

mod error;
mod facts;
mod record;
mod value;

pub use error::{ModelError, Result};
pub use facts::{
    ActivityFact, CourseSelectFact, EnrollmentHistoryFact, FactRecord, GeoFact, GeoRecord,
    InstructorLookupFact, PinActionFact, PinFact, SearchFact, UnpinActionFact,
};
pub use record::{LogRow, NULL_SENTINEL, NO_ACTOR_SENTINEL};
pub use value::SqlValue;
