//! Domain model for project snapshots.

use crate::core::domain::value_object::serde_helpers::option_system_time;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// A saved state of a project, from `/projects/{project_id}/snapshots`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Snapshot {
    pub snapshot_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Creation time (seconds since the UNIX epoch on the wire).
    #[serde(
        default,
        with = "option_system_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<SystemTime>,
}
