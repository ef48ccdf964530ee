use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Ledger, extractor, transcript};
use crate::errors::AppResult;
use crate::export::{ExportBundle, notify_export_success};
use crate::ui::messages::{info, warning};
use crate::utils::table::Table;
use chrono::Local;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan {
        file,
        session_name,
        list,
        dry_run,
    } = cmd
    {
        let text = fs::read_to_string(file)?;
        let session = session_name.as_deref().or(cfg.session_name.as_deref());

        let mut ledger = Ledger::new();
        ledger.start(session, Local::now());

        for frag in transcript::fragments(&text) {
            if let Some(c) = extractor::extract(&frag.text, &frag.ancestors) {
                ledger.upsert(&c.name, &c.email, Local::now());
            }
        }

        info(format!(
            "{} attendee(s) captured from {}",
            ledger.len(),
            file
        ));

        if *list {
            println!("{}", render_roster(&ledger));
        }

        if *dry_run {
            return Ok(());
        }

        if ledger.is_empty() {
            warning("No attendance entries found; nothing to export");
            return Ok(());
        }

        let bundle = ExportBundle::build(&ledger, None, Local::now());
        let path = bundle.write_to(&cfg.output_dir)?;
        notify_export_success(&path);
    }
    Ok(())
}

fn render_roster(ledger: &Ledger) -> String {
    let mut table = Table::new(&["Name", "Email", "Time", "Date"]);
    for rec in ledger.records() {
        table.add_row(vec![
            rec.name.clone(),
            rec.email.clone(),
            rec.display_time.clone(),
            rec.display_date.clone(),
        ]);
    }
    table.render()
}
