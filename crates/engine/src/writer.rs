//! Batching fact writer.
//!
//! One [`Batch`] per destination table, each flushed through the shared
//! [`BatchSink`] the moment it reaches capacity. High-volume tables
//! (activities, course selects, enrollment history, ip locations) get the
//! big capacity; the rest flush in smaller rounds.

use actlog_model::{
    ActivityFact, CourseSelectFact, EnrollmentHistoryFact, FactRecord, GeoFact,
    InstructorLookupFact, PinActionFact, PinFact, SearchFact, UnpinActionFact,
};
use actlog_sink::{BatchSink, Destination};

use crate::batch::Batch;
use crate::error::Result;

pub struct FactWriter<D: Destination> {
    sink: BatchSink<D>,
    activities: Batch<ActivityFact>,
    context_pins: Batch<PinFact>,
    pins: Batch<PinActionFact>,
    unpins: Batch<UnpinActionFact>,
    selects: Batch<CourseSelectFact>,
    enrollments: Batch<EnrollmentHistoryFact>,
    instructors: Batch<InstructorLookupFact>,
    searches: Batch<SearchFact>,
    locations: Batch<GeoFact>,
}

/// Append one fact and flush its batch if that append filled it.
fn buffered<D: Destination, T: FactRecord>(
    sink: &mut BatchSink<D>,
    batch: &mut Batch<T>,
    fact: T,
) -> Result<()> {
    batch.append(fact);
    if batch.is_full() {
        sink.write(batch.drain())?;
    }
    Ok(())
}

impl<D: Destination> FactWriter<D> {
    pub fn new(destination: D, big: usize, small: usize) -> Self {
        Self {
            sink: BatchSink::new(destination),
            activities: Batch::new(ActivityFact::TABLE, big),
            context_pins: Batch::new(PinFact::TABLE, small),
            pins: Batch::new(PinActionFact::TABLE, small),
            unpins: Batch::new(UnpinActionFact::TABLE, small),
            selects: Batch::new(CourseSelectFact::TABLE, big),
            enrollments: Batch::new(EnrollmentHistoryFact::TABLE, big),
            instructors: Batch::new(InstructorLookupFact::TABLE, small),
            searches: Batch::new(SearchFact::TABLE, small),
            locations: Batch::new(GeoFact::TABLE, big),
        }
    }

    pub fn activity(&mut self, fact: ActivityFact) -> Result<()> {
        buffered(&mut self.sink, &mut self.activities, fact)
    }

    pub fn context_pin(&mut self, fact: PinFact) -> Result<()> {
        buffered(&mut self.sink, &mut self.context_pins, fact)
    }

    pub fn pin(&mut self, fact: PinActionFact) -> Result<()> {
        buffered(&mut self.sink, &mut self.pins, fact)
    }

    pub fn unpin(&mut self, fact: UnpinActionFact) -> Result<()> {
        buffered(&mut self.sink, &mut self.unpins, fact)
    }

    pub fn select(&mut self, fact: CourseSelectFact) -> Result<()> {
        buffered(&mut self.sink, &mut self.selects, fact)
    }

    /// Enrollment history arrives as a burst of facts from one row; the
    /// whole burst is appended before the fullness check so it never
    /// splits across flushes.
    pub fn enrollment_history(
        &mut self,
        facts: impl IntoIterator<Item = EnrollmentHistoryFact>,
    ) -> Result<()> {
        self.enrollments.extend(facts);
        if self.enrollments.is_full() {
            self.sink.write(self.enrollments.drain())?;
        }
        Ok(())
    }

    pub fn instructor(&mut self, fact: InstructorLookupFact) -> Result<()> {
        buffered(&mut self.sink, &mut self.instructors, fact)
    }

    pub fn search(&mut self, fact: SearchFact) -> Result<()> {
        buffered(&mut self.sink, &mut self.searches, fact)
    }

    pub fn location(&mut self, fact: GeoFact) -> Result<()> {
        buffered(&mut self.sink, &mut self.locations, fact)
    }

    /// Flush everything still buffered, emptying every batch.
    pub fn flush_all(&mut self) -> Result<()> {
        self.sink.write(self.activities.drain())?;
        self.sink.write(self.context_pins.drain())?;
        self.sink.write(self.pins.drain())?;
        self.sink.write(self.unpins.drain())?;
        self.sink.write(self.selects.drain())?;
        self.sink.write(self.enrollments.drain())?;
        self.sink.write(self.instructors.drain())?;
        self.sink.write(self.searches.drain())?;
        self.sink.write(self.locations.drain())?;
        Ok(())
    }

    /// Running total of value-truncation warnings reported by the sink.
    pub fn truncated_values(&self) -> u64 {
        self.sink.truncated_values()
    }

    pub fn destination_mut(&mut self) -> &mut D {
        self.sink.destination_mut()
    }

    pub fn into_destination(self) -> D {
        self.sink.into_destination()
    }
}

#[cfg(test)]
#[path = "writer_test.rs"]
mod writer_test;
