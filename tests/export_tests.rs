use chatroll::core::Ledger;
use chatroll::export::{ExportBundle, csv as csv_export};
use chrono::{Local, TimeZone};

fn at(h: u32, m: u32) -> chrono::DateTime<Local> {
    Local.with_ymd_and_hms(2026, 1, 7, h, m, 0).unwrap()
}

#[test]
fn test_render_header_and_quoted_fields() {
    let mut ledger = Ledger::new();
    ledger.upsert("John Doe", "john@example.com", at(9, 0));

    let content = csv_export::render(&ledger);
    assert_eq!(
        content,
        "Name,Email,Time,Date\n\"John Doe\",\"john@example.com\",09:00 AM,07/01/2026\n"
    );
}

#[test]
fn test_render_escapes_double_quotes() {
    let mut ledger = Ledger::new();
    ledger.upsert("O\"Brien", "obrien@example.com", at(9, 0));

    let content = csv_export::render(&ledger);
    assert!(content.contains("\"O\"\"Brien\",\"obrien@example.com\""));
}

#[test]
fn test_render_empty_ledger_is_header_only() {
    let ledger = Ledger::new();
    assert_eq!(csv_export::render(&ledger), "Name,Email,Time,Date\n");
}

#[test]
fn test_rendered_csv_parses_back() {
    let mut ledger = Ledger::new();
    ledger.upsert("O\"Brien", "obrien@example.com", at(9, 0));
    ledger.upsert("Rahul Verma", "rahul@example.com", at(9, 5));

    let content = csv_export::render(&ledger);
    let mut reader = csv::Reader::from_reader(content.as_bytes());

    let headers = reader.headers().expect("headers").clone();
    assert_eq!(headers, csv::StringRecord::from(vec!["Name", "Email", "Time", "Date"]));

    let rows: Vec<csv::StringRecord> =
        reader.records().collect::<Result<_, _>>().expect("rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "O\"Brien");
    assert_eq!(&rows[1][0], "Rahul Verma");
    assert_eq!(&rows[1][2], "09:05 AM");
}

#[test]
fn test_filename_with_session_name() {
    let name = csv_export::filename(Some("Daily Standup"), at(9, 0));
    assert_eq!(name, "Daily_Standup_07-01-2026_09-00-AM.csv");
}

#[test]
fn test_filename_without_session_name() {
    let name = csv_export::filename(None, at(14, 30));
    assert_eq!(name, "07-01-2026_02-30-PM.csv");
}

#[test]
fn test_filename_sanitizes_session_name() {
    let name = csv_export::filename(Some("Q4/Review!"), at(9, 0));
    assert_eq!(name, "Q4_Review__07-01-2026_09-00-AM.csv");
}

#[test]
fn test_bundle_prefers_name_override() {
    let mut ledger = Ledger::new();
    ledger.start(Some("Standup"), at(9, 0));
    ledger.upsert("Rahul Verma", "rahul@example.com", at(9, 1));

    let bundle = ExportBundle::build(&ledger, Some("Retro"), at(10, 0));
    assert!(bundle.filename.starts_with("Retro_"));
    assert_eq!(bundle.snapshot.count, 1);
    assert!(bundle.csv_content.contains("Rahul Verma"));

    let bundle = ExportBundle::build(&ledger, None, at(10, 0));
    assert!(bundle.filename.starts_with("Standup_"));
}

#[test]
fn test_filename_matches_export_pattern() {
    let re =
        regex::Regex::new(r"^([A-Za-z0-9_\-]+_)?\d{2}-\d{2}-\d{4}_\d{2}-\d{2}-(AM|PM)\.csv$")
            .unwrap();
    assert!(re.is_match(&csv_export::filename(Some("Daily Standup"), at(9, 0))));
    assert!(re.is_match(&csv_export::filename(None, at(23, 59))));
}
