//! Search-session coalescing.
//!
//! Visitors type searches one keystroke at a time and every keystroke is
//! logged as its own row, each carrying the full term typed so far. The
//! tracker folds a run of such rows into one logical search per actor:
//! the first typing row anchors the session (row id, ip, timestamps), later
//! typing rows replace the accumulated term, and the session commits into
//! exactly one activity fact and one search fact when a disqualifying row
//! or end-of-stream closes it.
//!
//! Sessions are keyed by actor. A row only ever touches its own actor's
//! session; other actors' sessions stay open across it.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use tracing::debug;

use actlog_extract::{extract_search_term, parse_search_results};
use actlog_model::{ActivityFact, LogRow, SearchFact};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Callers whose rows count as search keystrokes
const TYPING_CALLERS: &[&str] = &["find_search", "detailed_search"];

/// Actions whose rows count as search keystrokes
const TYPING_ACTIONS: &[&str] = &["search", "search_query"];

/// Whether a row matches the typing criteria (caller AND action)
pub fn is_typing(row: &LogRow) -> bool {
    TYPING_CALLERS.contains(&row.caller.as_str()) && TYPING_ACTIONS.contains(&row.action.as_str())
}

/// One in-flight search: anchor fields from the first typing row plus the
/// latest accumulated term and latest non-null output payload.
#[derive(Debug, Clone)]
pub struct SearchSession {
    pub row_id: u64,
    pub actor: String,
    pub ip: String,
    pub caller: String,
    pub action: String,
    pub created_at: String,
    pub updated_at: String,
    term: String,
    output: Option<String>,
}

impl SearchSession {
    fn open(row: &LogRow) -> Self {
        let mut session = Self {
            row_id: row.row_id,
            actor: row.actor.clone(),
            ip: row.ip.clone(),
            caller: row.caller.clone(),
            action: row.action.clone(),
            created_at: row.created_at.clone(),
            updated_at: row.updated_at.clone(),
            term: String::new(),
            output: None,
        };
        session.absorb(row);
        session
    }

    /// Fold one more typing row into the session.
    ///
    /// The term is replaced, not appended: every keystroke row carries the
    /// full term typed so far. The output is replaced only when the row
    /// actually has one.
    fn absorb(&mut self, row: &LogRow) {
        if let Some(term) = extract_search_term(&row.key_parameter) {
            self.term = term.to_owned();
        }
        if row.has_output() {
            self.output = Some(row.output.clone());
        }
    }

    /// Commit the session into its two facts.
    ///
    /// The activity fact carries the anchor's row id and timestamps; the
    /// search fact carries the final term and whatever results the last
    /// non-null output parsed into (nulls when none was ever seen or no
    /// format recognized it).
    pub fn commit(self) -> (ActivityFact, SearchFact) {
        let results = self.output.as_deref().and_then(parse_search_results);
        let (course_results, instructor_results) = match results {
            Some(r) => (Some(r.render_courses()), r.instructors),
            None => (None, None),
        };

        let activity = ActivityFact {
            row_id: self.row_id,
            actor: self.actor,
            ip: self.ip,
            caller: self.caller,
            action: self.action,
            created_at: self.created_at.clone(),
            updated_at: self.updated_at,
        };
        let search = SearchFact {
            row_id: activity.row_id,
            search_term: self.term,
            course_results,
            instructor_results,
        };
        (activity, search)
    }
}

/// Per-actor map of in-flight searches.
#[derive(Debug, Default)]
pub struct SearchSessionTracker {
    sessions: HashMap<String, SearchSession>,
}

impl SearchSessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, actor: &str) -> bool {
        self.sessions.contains_key(actor)
    }

    pub fn open_count(&self) -> usize {
        self.sessions.len()
    }

    /// Feed a typing row: opens a session for its actor, or extends the
    /// one already open.
    pub fn feed(&mut self, row: &LogRow) {
        match self.sessions.get_mut(&row.actor) {
            Some(session) => session.absorb(row),
            None => {
                debug!(actor = %row.actor, row_id = row.row_id, "search session opened");
                self.sessions.insert(row.actor.clone(), SearchSession::open(row));
            }
        }
    }

    /// Remove the actor's session, if any. Closing an already-idle actor
    /// is a no-op; end-of-stream draining relies on that.
    pub fn close(&mut self, actor: &str) -> Option<SearchSession> {
        self.sessions.remove(actor)
    }

    /// Remove and return every open session.
    pub fn drain(&mut self) -> Vec<SearchSession> {
        self.sessions.drain().map(|(_, session)| session).collect()
    }

    /// Remove only the sessions whose anchor timestamp is at least
    /// `threshold_secs` older than `reference`, leaving fresher ones open.
    ///
    /// Meant for incremental runs that stop mid-stream; a plain
    /// single-pass run drains unconditionally instead. Sessions whose
    /// timestamps do not parse are treated as stale.
    pub fn close_stale(&mut self, reference: &str, threshold_secs: i64) -> Vec<SearchSession> {
        let reference = NaiveDateTime::parse_from_str(reference, TIMESTAMP_FORMAT).ok();

        let stale: Vec<String> = self
            .sessions
            .iter()
            .filter(|(_, session)| {
                let anchor =
                    NaiveDateTime::parse_from_str(&session.created_at, TIMESTAMP_FORMAT).ok();
                match (reference, anchor) {
                    (Some(reference), Some(anchor)) => {
                        (reference - anchor).num_seconds() >= threshold_secs
                    }
                    _ => true,
                }
            })
            .map(|(actor, _)| actor.clone())
            .collect();

        stale
            .into_iter()
            .filter_map(|actor| self.sessions.remove(&actor))
            .collect()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
