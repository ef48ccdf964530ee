use serde::{Deserialize, Serialize};

/// Lightweight status view of the ledger. Copies no records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub is_running: bool,
    pub count: usize,
    pub session_name: Option<String>,
    pub has_session: bool,
}
