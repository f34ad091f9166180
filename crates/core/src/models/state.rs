use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A timestamped entry in a print job's history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintJobState {
    #[serde(default)]
    pub print_job_id: i64,
    /// e.g. `new`, `sent_to_client`, `downloading`, `done`, `error`, `expired`.
    #[serde(default)]
    pub state: String,
    /// Human readable detail; where to look when the state is `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Machine readable counterpart of `message`. Usually null.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Null when the state did not originate from a client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_timestamp: Option<DateTime<Utc>>,
    /// Milliseconds since the job's first state.
    #[serde(default)]
    pub age: i64,
}
