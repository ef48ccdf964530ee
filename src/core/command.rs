//! Message command surface and the session controller that owns the ledger.
//!
//! Commands arrive as discrete messages and are each handled to completion
//! before the next; every verb is answered, unknown verbs included, so a
//! confused caller always gets a usable status back.

use crate::core::extractor;
use crate::core::ledger::Ledger;
use crate::export::ExportBundle;
use crate::models::Snapshot;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    /// Begin or resume observation, optionally naming the session.
    #[serde(rename_all = "camelCase")]
    Start {
        #[serde(default)]
        session_name: Option<String>,
    },
    /// Pause observation; data retained.
    Stop,
    /// Clear all data. Destructive; the caller confirms before sending.
    Restart,
    /// Render the roster as CSV plus a generated filename.
    #[serde(rename_all = "camelCase")]
    Export {
        #[serde(default)]
        session_name: Option<String>,
    },
    GetStatus,
    /// A pushed observation: one fragment plus its ancestor texts,
    /// closest first.
    Fragment {
        text: String,
        #[serde(default)]
        ancestors: Vec<String>,
    },
    /// Fail-soft catch-all for unrecognized verbs.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Response {
    Snapshot(Snapshot),
    Export(ExportBundle),
}

/// Owns the only reference to the ledger for one session's lifetime.
#[derive(Debug, Default)]
pub struct SessionController {
    ledger: Ledger,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Handle one command to completion. Never fails: malformed or
    /// unrecognized input degrades to a status answer.
    pub fn handle(&mut self, cmd: Command, now: DateTime<Local>) -> Response {
        match cmd {
            Command::Start { session_name } => {
                Response::Snapshot(self.ledger.start(session_name.as_deref(), now))
            }
            Command::Stop => Response::Snapshot(self.ledger.stop()),
            Command::Restart => Response::Snapshot(self.ledger.reset()),
            Command::Export { session_name } => Response::Export(ExportBundle::build(
                &self.ledger,
                session_name.as_deref(),
                now,
            )),
            Command::GetStatus => Response::Snapshot(self.ledger.snapshot()),
            Command::Fragment { text, ancestors } => {
                // Observation is live only while running.
                if self.ledger.is_running()
                    && let Some(c) = extractor::extract(&text, &ancestors)
                {
                    self.ledger.upsert(&c.name, &c.email, now);
                }
                Response::Snapshot(self.ledger.snapshot())
            }
            Command::Unknown => Response::Snapshot(self.ledger.snapshot()),
        }
    }
}
