//! Domain models for computes, the servers that actually run nodes.

use serde::{Deserialize, Serialize};

/// A compute registered on the controller.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Compute {
    pub compute_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_usage_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_usage_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// An emulator image available on a compute.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ComputeImage {
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5sum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filesize: Option<u64>,
}

/// Console and UDP ports reserved on a compute.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ComputePorts {
    #[serde(default)]
    pub console_port_range: Vec<u32>,
    #[serde(default)]
    pub console_ports: Vec<u32>,
    #[serde(default)]
    pub udp_port_range: Vec<u32>,
    #[serde(default)]
    pub udp_ports: Vec<u32>,
}
