//! Scanners domain: linked scanners and their link state.

pub mod client;

use serde::{Deserialize, Serialize};

use crate::shared::serde_util::int_bool;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scanner {
    pub id: u64,
    #[serde(default)]
    pub uuid: Option<String>,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "type", default)]
    pub scanner_type: Option<String>,
    #[serde(default, deserialize_with = "int_bool::deserialize")]
    pub linked: bool,
    #[serde(default)]
    pub pool: bool,
    #[serde(default)]
    pub engine_version: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScannersResponse {
    #[serde(default)]
    pub scanners: Vec<Scanner>,
}
