//! Domain models for links between node ports.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

/// Physical layer of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Ethernet,
    Serial,
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkType::Ethernet => f.write_str("ethernet"),
            LinkType::Serial => f.write_str("serial"),
        }
    }
}

/// One side of a link: a port on a node.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LinkEndpoint {
    pub node_id: String,
    pub adapter_number: u32,
    pub port_number: u32,
    /// Label drawn next to the port (`{"text": ...}` plus style).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<serde_json::Value>,
}

impl LinkEndpoint {
    /// Returns true if this endpoint sits on the given node port.
    pub fn is_at(&self, node_id: &str, adapter_number: u32, port_number: u32) -> bool {
        self.node_id == node_id
            && self.adapter_number == adapter_number
            && self.port_number == port_number
    }
}

/// Attributes of a link as exchanged with the server.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LinkInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<LinkType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_style: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspend: Option<bool>,
    /// Endpoints of the link; required for creation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<LinkEndpoint>,
    /// Packet filters (latency, loss, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<serde_json::Map<String, serde_json::Value>>,
    /// True if a capture is running on the link (read only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capturing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_compute_id: Option<String>,
}

/// A packet filter the server can apply on a link, from
/// `/projects/{project_id}/links/{link_id}/available_filters`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AvailableFilter {
    /// Key used in [`LinkInfo::filters`], e.g. `delay`.
    #[serde(rename = "type")]
    pub filter_type: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Parameters accepted by the filter.
    #[serde(default)]
    pub spec: serde_json::Value,
}

/// Packet filters to apply on a link. Unset filters are removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkFilters {
    /// `-1` drops everything, `N` drops every Nth packet.
    pub frequency_drop: Option<i64>,
    /// Chance in percent for a packet to be lost.
    pub packet_loss: Option<u32>,
    /// Delay in milliseconds.
    pub latency: Option<u32>,
    /// Variation (+/-) of the delay in milliseconds; used only with `latency`.
    pub jitter: Option<u32>,
    /// Chance in percent for a packet to be corrupted.
    pub corrupt: Option<u32>,
    /// Packets matching this BPF expression are dropped.
    pub bpf: Option<String>,
}

impl LinkFilters {
    /// The `filters` attribute of a link, e.g. `{"delay": [50, 10]}`.
    pub fn to_map(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut filters = serde_json::Map::new();
        if let Some(frequency_drop) = self.frequency_drop {
            filters.insert("frequency_drop".to_string(), json!([frequency_drop]));
        }
        if let Some(packet_loss) = self.packet_loss {
            filters.insert("packet_loss".to_string(), json!([packet_loss]));
        }
        if let Some(bpf) = &self.bpf {
            filters.insert("bpf".to_string(), json!([bpf]));
        }
        if let Some(corrupt) = self.corrupt {
            filters.insert("corrupt".to_string(), json!([corrupt]));
        }
        if let Some(latency) = self.latency {
            let delay = match self.jitter {
                Some(jitter) => json!([latency, jitter]),
                None => json!([latency]),
            };
            filters.insert("delay".to_string(), delay);
        }
        filters
    }
}
