//! Display formatting for capture timestamps.

use chrono::{DateTime, Local};

/// 12-hour clock with AM/PM, zero-padded hour and minute: "09:00 AM".
pub fn display_time(dt: DateTime<Local>) -> String {
    dt.format("%I:%M %p").to_string()
}

/// Day/month/year, zero-padded: "07/01/2026".
pub fn display_date(dt: DateTime<Local>) -> String {
    dt.format("%d/%m/%Y").to_string()
}

/// Filename-safe stamp: "07-01-2026_09-00-AM".
pub fn filename_stamp(dt: DateTime<Local>) -> String {
    dt.format("%d-%m-%Y_%I-%M-%p").to_string()
}
