//! Domain models for nodes, the emulated devices of a project.
//!
//! This module defines the attributes exchanged with the
//! `/projects/{project_id}/nodes` endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Emulator backing a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Cloud,
    Nat,
    EthernetHub,
    EthernetSwitch,
    FrameRelaySwitch,
    AtmSwitch,
    Docker,
    Dynamips,
    Vpcs,
    Traceng,
    Virtualbox,
    Vmware,
    Iou,
    Qemu,
}

impl NodeType {
    /// Wire name of the node type.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Cloud => "cloud",
            NodeType::Nat => "nat",
            NodeType::EthernetHub => "ethernet_hub",
            NodeType::EthernetSwitch => "ethernet_switch",
            NodeType::FrameRelaySwitch => "frame_relay_switch",
            NodeType::AtmSwitch => "atm_switch",
            NodeType::Docker => "docker",
            NodeType::Dynamips => "dynamips",
            NodeType::Vpcs => "vpcs",
            NodeType::Traceng => "traceng",
            NodeType::Virtualbox => "virtualbox",
            NodeType::Vmware => "vmware",
            NodeType::Iou => "iou",
            NodeType::Qemu => "qemu",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Console protocol exposed by a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ConsoleType {
    #[serde(rename = "vnc")]
    Vnc,
    #[serde(rename = "telnet")]
    Telnet,
    #[serde(rename = "http")]
    Http,
    #[serde(rename = "https")]
    Https,
    #[serde(rename = "spice")]
    Spice,
    #[serde(rename = "spice+agent")]
    SpiceAgent,
    #[serde(rename = "none", alias = "null")]
    None,
}

impl ConsoleType {
    /// Wire name of the console type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleType::Vnc => "vnc",
            ConsoleType::Telnet => "telnet",
            ConsoleType::Http => "http",
            ConsoleType::Https => "https",
            ConsoleType::Spice => "spice",
            ConsoleType::SpiceAgent => "spice+agent",
            ConsoleType::None => "none",
        }
    }
}

impl fmt::Display for ConsoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime state of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Stopped,
    Started,
    Suspended,
}

impl NodeStatus {
    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Stopped => "stopped",
            NodeStatus::Started => "started",
            NodeStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A port of a node, as listed in the read-only `ports` attribute.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Port {
    /// Port name (e.g. `Ethernet0`, `e0/1`).
    pub name: String,
    /// Adapter the port belongs to.
    pub adapter_number: u32,
    /// Port number within its adapter.
    pub port_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_link_types: Option<serde_json::Value>,
}

fn default_compute_id() -> String {
    "local".to_string()
}

/// Attributes of a node as exchanged with the server.
///
/// Every attribute is optional locally: a node is usually built with a few
/// of them (name, template) and completed from the server's answers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NodeInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    /// Compute hosting the node, `local` by default.
    #[serde(default = "default_compute_id")]
    pub compute_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<NodeType>,
    /// Working directory of the node on the server (read only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<NodeStatus>,
    /// Ports of the node (read only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<Port>>,
    /// Format of port names, `{0}` being replaced by the port number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_name_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_segment_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_port_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<serde_json::Value>,
    /// Console TCP port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console_host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console_type: Option<ConsoleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console_auto_start: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_adapters: Option<Vec<serde_json::Value>>,
    /// Height of the node symbol (read only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    /// Width of the node symbol (read only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Emulator specific properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
    /// Name of the template the node comes from, resolved to `template_id` on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl Default for NodeInfo {
    fn default() -> Self {
        Self {
            name: None,
            project_id: None,
            node_id: None,
            compute_id: default_compute_id(),
            node_type: None,
            node_directory: None,
            status: None,
            ports: None,
            port_name_format: None,
            port_segment_size: None,
            first_port_name: None,
            locked: None,
            label: None,
            console: None,
            console_host: None,
            console_type: None,
            console_auto_start: None,
            command_line: None,
            custom_adapters: None,
            height: None,
            width: None,
            symbol: None,
            x: None,
            y: None,
            z: None,
            template_id: None,
            properties: None,
            template: None,
        }
    }
}

impl NodeInfo {
    /// Attributes for a node created from the named template.
    pub fn from_template(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            template: Some(template.into()),
            ..Default::default()
        }
    }

    /// Finds a port by its name.
    pub fn port_named(&self, name: &str) -> Option<&Port> {
        self.ports.as_deref()?.iter().find(|port| port.name == name)
    }

    /// Finds a port by its adapter/port numbers.
    pub fn port_at(&self, adapter_number: u32, port_number: u32) -> Option<&Port> {
        self.ports.as_deref()?.iter().find(|port| {
            port.adapter_number == adapter_number && port.port_number == port_number
        })
    }
}
