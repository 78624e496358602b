//! Assets domain: discovered assets and asset imports.

pub mod client;

use serde::{Deserialize, Serialize};

/// An asset as listed by `GET assets`. Detail lookups return the full JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    #[serde(default)]
    pub has_agent: bool,
    #[serde(default)]
    pub last_seen: Option<String>,
    #[serde(default)]
    pub ipv4: Vec<String>,
    #[serde(default)]
    pub ipv6: Vec<String>,
    #[serde(default)]
    pub fqdn: Vec<String>,
    #[serde(default)]
    pub netbios_name: Vec<String>,
    #[serde(default)]
    pub operating_system: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssetsResponse {
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// One asset record for `POST import/assets`. At least one identifying
/// attribute (fqdn, ipv4, netbios name or mac address) is required.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetImport {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fqdn: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ipv4: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netbios_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mac_address: Vec<String>,
}

impl AssetImport {
    pub(crate) fn is_identifiable(&self) -> bool {
        !self.fqdn.is_empty()
            || !self.ipv4.is_empty()
            || self.netbios_name.as_deref().is_some_and(|n| !n.is_empty())
            || !self.mac_address.is_empty()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImportResponse {
    pub asset_import_job_uuid: String,
}

/// Status of an asset import job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetImportJob {
    pub job_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub batches: Option<u64>,
    #[serde(default)]
    pub uploaded_assets: Option<u64>,
    #[serde(default)]
    pub failed_assets: Option<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImportJobsResponse {
    #[serde(default)]
    pub asset_import_jobs: Vec<AssetImportJob>,
}
