use crate::config::Config;
use crate::core::{Command, SessionController};
use crate::errors::AppResult;
use chrono::Local;
use std::io::{self, BufRead, Write};

/// Run the message command surface as a line protocol: one JSON command per
/// stdin line, one JSON response per stdout line. Commands are handled to
/// completion in arrival order on this single thread.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut controller = SessionController::new();
    let default_session = cfg.session_name.clone();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        // Malformed input degrades to the unknown-verb no-op.
        let cmd = match serde_json::from_str::<Command>(&line) {
            Ok(cmd) => cmd,
            Err(_) => Command::Unknown,
        };

        let cmd = match cmd {
            Command::Start { session_name: None } => Command::Start {
                session_name: default_session.clone(),
            },
            other => other,
        };

        let resp = controller.handle(cmd, Local::now());
        serde_json::to_writer(&mut out, &resp)?;
        out.write_all(b"\n")?;
        out.flush()?;
    }

    Ok(())
}
