//! Summary and inventory views derived from fetched resources.
//!
//! Each row renders its one-line form through `Display`, e.g.
//! `alpine-1: started -- Console: 5005 -- ID: ef503c45-...`.

use crate::core::domain::model::node::{ConsoleType, NodeStatus, NodeType};
use crate::core::domain::model::project::ProjectStatus;
use serde::Serialize;
use std::fmt;

struct OrNone<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for OrNone<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("None"),
        }
    }
}

/// One project of the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub name: String,
    pub project_id: String,
    pub total_nodes: u64,
    pub total_links: u64,
    pub status: Option<ProjectStatus>,
}

impl fmt::Display for ProjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -- Nodes: {} -- Links: {} -- Status: {}",
            self.name,
            self.project_id,
            self.total_nodes,
            self.total_links,
            OrNone(&self.status)
        )
    }
}

/// One template of the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateSummary {
    pub name: String,
    pub template_id: String,
    pub template_type: Option<String>,
    pub builtin: bool,
    /// `N/A` when the template has no console.
    pub console_type: String,
    pub category: Option<String>,
}

impl fmt::Display for TemplateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -- Type: {} -- Builtin: {} -- Console: {} -- Category: {}",
            self.name,
            self.template_id,
            OrNone(&self.template_type),
            self.builtin,
            self.console_type,
            OrNone(&self.category)
        )
    }
}

/// One node of a project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSummary {
    pub name: Option<String>,
    pub status: Option<NodeStatus>,
    pub console: Option<u32>,
    pub node_id: Option<String>,
}

impl fmt::Display for NodeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -- Console: {} -- ID: {}",
            OrNone(&self.name),
            OrNone(&self.status),
            OrNone(&self.console),
            OrNone(&self.node_id)
        )
    }
}

/// One link of a project, named by node and port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSummary {
    pub node_a: String,
    pub port_a: String,
    pub node_b: String,
    pub port_b: String,
}

impl fmt::Display for LinkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ---- {}: {}",
            self.node_a, self.port_a, self.node_b, self.port_b
        )
    }
}

/// Inventory entry of a node, keyed by node name in [`crate::Project::nodes_inventory`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeInventoryEntry {
    pub server: Option<String>,
    pub name: Option<String>,
    pub console_port: Option<u32>,
    pub console_type: Option<ConsoleType>,
    #[serde(rename = "type")]
    pub node_type: Option<NodeType>,
    pub template: Option<String>,
}
