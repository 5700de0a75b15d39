//! Domain models for projects, the top-level container of nodes and links.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a project is loaded on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Opened,
    Closed,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectStatus::Opened => f.write_str("opened"),
            ProjectStatus::Closed => f.write_str("closed"),
        }
    }
}

/// Attributes of a project as exchanged with the `/projects` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProjectInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    /// Location of the project on the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Start every node when the project is opened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_start: Option<bool>,
    /// Close the project when the last client disconnects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_close: Option<bool>,
    /// Open the project when the server starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_open: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawing_grid_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_grid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_interface_labels: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_layers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap_to_grid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<serde_json::Value>,
    /// Variables required to run the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u32>,
}

impl ProjectInfo {
    /// Attributes for a new project with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// Object counts of a project, from `/projects/{project_id}/stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectStats {
    #[serde(default)]
    pub nodes: u64,
    #[serde(default)]
    pub links: u64,
    #[serde(default)]
    pub drawings: u64,
    #[serde(default)]
    pub snapshots: u64,
}
