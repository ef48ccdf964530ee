use crate::utils::time::{display_date, display_time};
use chrono::{DateTime, Local};
use serde::Serialize;

/// One captured attendee, keyed in the ledger by `email`.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceRecord {
    pub name: String,           // never empty, falls back to the email local-part
    pub email: String,          // lower-cased, identity key
    pub captured_at: DateTime<Local>,
    pub display_time: String,   // "09:00 AM"
    pub display_date: String,   // "07/01/2026"
}

impl AttendanceRecord {
    /// Build a record with display fields derived from the capture time.
    pub fn new(name: &str, email: &str, captured_at: DateTime<Local>) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_lowercase(),
            captured_at,
            display_time: display_time(captured_at),
            display_date: display_date(captured_at),
        }
    }
}
