//! Server domain: platform status and properties.

pub mod client;

use serde::{Deserialize, Serialize};

/// `GET server/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerStatus {
    pub code: u16,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
}

impl ServerStatus {
    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

/// `GET server/properties`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerProperties {
    #[serde(default)]
    pub server_version: Option<String>,
    #[serde(default)]
    pub server_build: Option<String>,
    #[serde(default)]
    pub server_uuid: Option<String>,
    #[serde(default)]
    pub analytics: Option<serde_json::Value>,
    #[serde(default)]
    pub capabilities: Option<serde_json::Value>,
    #[serde(default)]
    pub license: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
