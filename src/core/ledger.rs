//! The attendance ledger: a deduplicating store of records keyed by
//! normalized email, plus the session running flag and metadata.
//!
//! A session spans the time between creation/reset and the next reset;
//! start/stop toggles observation without losing data, so stopping and
//! starting again resumes into the same roster.

use crate::models::{AttendanceRecord, Snapshot};
use chrono::{DateTime, Local};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct Ledger {
    records: BTreeMap<String, AttendanceRecord>,
    is_running: bool,
    session_name: Option<String>,
    session_started_at: Option<DateTime<Local>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the record for `email` (last write wins).
    /// At most one record exists per normalized email.
    pub fn upsert(&mut self, name: &str, email: &str, now: DateTime<Local>) {
        let record = AttendanceRecord::new(name, email, now);
        self.records.insert(record.email.clone(), record);
    }

    /// Status view; copies no records and changes no state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            is_running: self.is_running,
            count: self.records.len(),
            session_name: self.session_name.clone(),
            has_session: self.session_started_at.is_some(),
        }
    }

    /// Begin or resume observation. Idempotent: starting while already
    /// running changes nothing. The session start time is set only on the
    /// first transition and survives stop/start cycles.
    pub fn start(&mut self, name: Option<&str>, now: DateTime<Local>) -> Snapshot {
        if !self.is_running {
            self.is_running = true;
            if self.session_started_at.is_none() {
                self.session_started_at = Some(now);
            }
            if let Some(n) = name
                && !n.is_empty()
            {
                self.session_name = Some(n.to_string());
            }
        }
        self.snapshot()
    }

    /// Pause observation; data is retained. Idempotent.
    pub fn stop(&mut self) -> Snapshot {
        self.is_running = false;
        self.snapshot()
    }

    /// Destructive: forces stop, clears all records and session metadata.
    /// Confirmation happens at the caller boundary.
    pub fn reset(&mut self) -> Snapshot {
        self.is_running = false;
        self.records.clear();
        self.session_name = None;
        self.session_started_at = None;
        self.snapshot()
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn session_name(&self) -> Option<&str> {
        self.session_name.as_deref()
    }

    pub fn session_started_at(&self) -> Option<DateTime<Local>> {
        self.session_started_at
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in stable (email-sorted) order.
    pub fn records(&self) -> impl Iterator<Item = &AttendanceRecord> {
        self.records.values()
    }
}
