//! CSV rendering and filename generation.
//!
//! The output format is fixed: header `Name,Email,Time,Date`, then one row
//! per record with name and email always double-quoted (internal quotes
//! doubled) and time/date always bare. The `csv` crate's writer cannot mix
//! quoting per field like that, so rows are rendered directly.

use crate::core::ledger::Ledger;
use chrono::{DateTime, Local};

use crate::utils::time::filename_stamp;

pub(crate) const CSV_HEADERS: [&str; 4] = ["Name", "Email", "Time", "Date"];

/// Render the full CSV text for the ledger's current roster.
pub fn render(ledger: &Ledger) -> String {
    let mut out = String::new();
    out.push_str(&CSV_HEADERS.join(","));
    out.push('\n');

    for rec in ledger.records() {
        out.push_str(&format!(
            "\"{}\",\"{}\",{},{}\n",
            escape(&rec.name),
            escape(&rec.email),
            rec.display_time,
            rec.display_date,
        ));
    }

    out
}

/// Double internal quotes per CSV escaping rules.
fn escape(field: &str) -> String {
    field.replace('"', "\"\"")
}

/// Build `[<SanitizedSessionName>_]DD-MM-YYYY_HH-MM-AMPM.csv` from the
/// current wall-clock time (not the session start time).
pub fn filename(session_name: Option<&str>, now: DateTime<Local>) -> String {
    let stamp = filename_stamp(now);
    match session_name {
        Some(name) if !name.is_empty() => format!("{}_{}.csv", sanitize(name), stamp),
        _ => format!("{}.csv", stamp),
    }
}

/// Replace anything outside `[A-Za-z0-9-_ ]` with `_`, then spaces with `_`
/// so the name is filename-safe everywhere.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' => c,
            _ => '_',
        })
        .collect()
}
