// src/export/mod.rs

pub mod csv;

use crate::core::ledger::Ledger;
use crate::errors::{AppError, AppResult};
use crate::models::Snapshot;
use crate::ui::messages::success;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything an EXPORT answer carries: the rendered CSV, the generated
/// filename, and the status snapshot flattened alongside.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub csv_content: String,
    pub filename: String,
    #[serde(flatten)]
    pub snapshot: Snapshot,
}

impl ExportBundle {
    /// Render the ledger's roster. `name_override` takes precedence over the
    /// ledger's own session name for the filename prefix.
    pub fn build(ledger: &Ledger, name_override: Option<&str>, now: DateTime<Local>) -> Self {
        let session_name = name_override.or(ledger.session_name());
        Self {
            csv_content: csv::render(ledger),
            filename: csv::filename(session_name, now),
            snapshot: ledger.snapshot(),
        }
    }

    /// Persist the CSV under `dir`, creating the directory if needed.
    /// Returns the full path written.
    pub fn write_to(&self, dir: &str) -> AppResult<PathBuf> {
        let dir = Path::new(dir);
        fs::create_dir_all(dir)
            .map_err(|e| AppError::Export(format!("cannot create {}: {e}", dir.display())))?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.csv_content)?;
        Ok(path)
    }
}

/// Shared completion message for export paths.
pub(crate) fn notify_export_success(path: &Path) {
    success(format!("Attendance export completed: {}", path.display()));
}
