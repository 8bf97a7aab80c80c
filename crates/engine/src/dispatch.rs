//! Per-row classification and fact emission.
//!
//! The dispatcher is the orchestration heart of the run: it drives the
//! search-session tracker, picks the extractors a row's (caller, action)
//! pair calls for, and emits the per-row activity and geolocation facts.
//!
//! # Design
//!
//! Session handling comes first and is strictly ordered: a row that no
//! longer matches the typing criteria closes its actor's open session,
//! and the session's facts are written before anything the closing row
//! itself produces. Typing rows enter the tracker and suppress their own
//! activity/geo emission; the committed session emits them for its anchor
//! row instead.

use tracing::warn;

use actlog_extract::{
    extract_context_pins, extract_course_select, extract_enrollment_history,
    extract_instructor_handle, CourseNameTable,
};
use actlog_model::{
    ActivityFact, CourseSelectFact, EnrollmentHistoryFact, GeoFact, InstructorLookupFact, LogRow,
    PinActionFact, PinFact, SearchFact, UnpinActionFact,
};
use actlog_sink::Destination;

use crate::error::Result;
use crate::geo::IpLocator;
use crate::session::{is_typing, SearchSession, SearchSessionTracker};
use crate::writer::FactWriter;

/// (caller, action) pairs that are recorded but mean nothing to this
/// pipeline. Acknowledged, not diagnosed.
const INERT_CALLERS: &[&str] = &[
    "get_recommendations",
    "pair",
    "unpair",
    "join_carta",
    "post_feedback",
];

const INERT_ACTIONS: &[&str] = &[
    "discount",
    "undiscount",
    "show_landing_page",
    "show_index_page",
    "store_calendar_state",
    "user_message",
    "confirm_user_message",
    "reset_confirm_user_message",
    "welcome_to_carta",
    "repin",
    "decline_user_message",
    "reset_lcs_response",
    "join_carta_interview",
];

pub struct RowDispatcher {
    tracker: SearchSessionTracker,
    course_names: CourseNameTable,
    locator: Box<dyn IpLocator>,
}

impl RowDispatcher {
    pub fn new(course_names: CourseNameTable, locator: Box<dyn IpLocator>) -> Self {
        Self {
            tracker: SearchSessionTracker::new(),
            course_names,
            locator,
        }
    }

    /// Classify one row and emit its facts.
    ///
    /// Rows carrying the no-actor sentinel must be dropped by the caller
    /// before dispatch; see [`pipeline::run`](crate::pipeline::run).
    pub fn dispatch<D: Destination>(
        &mut self,
        row: &LogRow,
        writer: &mut FactWriter<D>,
    ) -> Result<()> {
        let typing = is_typing(row);

        if self.tracker.is_open(&row.actor) {
            if typing {
                self.tracker.feed(row);
                return Ok(());
            }
            // Disqualifying row: the session's facts land before anything
            // this row produces.
            if let Some(session) = self.tracker.close(&row.actor) {
                self.commit_session(session, writer)?;
            }
        } else if typing {
            self.tracker.feed(row);
            return Ok(());
        }

        self.classify(row, writer)?;

        writer.activity(ActivityFact {
            row_id: row.row_id,
            actor: row.actor.clone(),
            ip: row.ip.clone(),
            caller: row.caller.clone(),
            action: row.action.clone(),
            created_at: row.created_at.clone(),
            updated_at: row.updated_at.clone(),
        })?;
        self.emit_geo(row.row_id, &row.ip, writer)
    }

    fn classify<D: Destination>(&mut self, row: &LogRow, writer: &mut FactWriter<D>) -> Result<()> {
        let caller = row.caller.as_str();
        let action = row.action.as_str();

        match (caller, action) {
            ("initial_recommendation", _) => {
                // Pins and enrollment history travel in the same
                // environment payload; both extractors run, neither is
                // exclusive.
                for (term_id, course_id) in extract_context_pins(&row.environment) {
                    writer.context_pin(PinFact {
                        row_id: row.row_id,
                        term_id,
                        course_id,
                    })?;
                }
                let history = extract_enrollment_history(&row.environment)
                    .into_iter()
                    .map(|course_id| EnrollmentHistoryFact {
                        row_id: row.row_id,
                        course_id,
                    });
                writer.enrollment_history(history)?;
            }

            ("get_course_info", _) | ("index", "show_index_page") => {
                if let Some(course_id) =
                    extract_course_select(&row.key_parameter, &self.course_names)
                {
                    writer.select(CourseSelectFact {
                        row_id: row.row_id,
                        course_id,
                    })?;
                }
            }

            ("update_rec" | "pin" | "unpin", "pin") => {
                if let Some(course_id) =
                    extract_course_select(&row.key_parameter, &self.course_names)
                {
                    writer.pin(PinActionFact {
                        row_id: row.row_id,
                        course_id,
                    })?;
                }
            }

            ("update_rec" | "pin" | "unpin", "unpin") => {
                if let Some(course_id) =
                    extract_course_select(&row.key_parameter, &self.course_names)
                {
                    writer.unpin(UnpinActionFact {
                        row_id: row.row_id,
                        course_id,
                    })?;
                }
            }

            ("instructor_profile", "instructor") => {
                if let Some(handle) = extract_instructor_handle(&row.key_parameter) {
                    writer.instructor(InstructorLookupFact {
                        row_id: row.row_id,
                        instructor: handle.to_owned(),
                    })?;
                }
            }

            _ if INERT_CALLERS.contains(&caller) || INERT_ACTIONS.contains(&action) => {}

            _ => {
                warn!(caller, action, row_id = row.row_id, "unimplemented activity");
            }
        }
        Ok(())
    }

    fn commit_session<D: Destination>(
        &mut self,
        session: SearchSession,
        writer: &mut FactWriter<D>,
    ) -> Result<()> {
        let ip = session.ip.clone();
        let (activity, search): (ActivityFact, SearchFact) = session.commit();
        let row_id = activity.row_id;
        writer.activity(activity)?;
        writer.search(search)?;
        self.emit_geo(row_id, &ip, writer)
    }

    fn emit_geo<D: Destination>(
        &mut self,
        row_id: u64,
        ip: &str,
        writer: &mut FactWriter<D>,
    ) -> Result<()> {
        writer.location(GeoFact {
            row_id,
            location: self.locator.get(ip),
        })
    }

    /// End-of-stream: commit every still-open session.
    pub fn finish<D: Destination>(&mut self, writer: &mut FactWriter<D>) -> Result<()> {
        for session in self.tracker.drain() {
            self.commit_session(session, writer)?;
        }
        Ok(())
    }

    pub fn open_sessions(&self) -> usize {
        self.tracker.open_count()
    }
}

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;
