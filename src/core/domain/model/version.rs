use serde::{Deserialize, Serialize};

/// Version information returned by `/version`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerVersion {
    pub version: String,
    #[serde(default)]
    pub local: bool,
}
