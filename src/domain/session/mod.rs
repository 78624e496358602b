//! Session domain: the authenticated user's own account.

pub mod client;

use serde::{Deserialize, Serialize};

/// `GET session`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDetails {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub permissions: u32,
    #[serde(default)]
    pub container_uuid: Option<String>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body of `PUT session`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SessionEdit<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
}

/// Body of `PUT session/chpasswd`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct PasswordChange<'a> {
    pub password: &'a str,
    pub current_password: &'a str,
}

/// Response of `PUT session/keys`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GeneratedKeys {
    #[serde(rename = "accessKey")]
    pub access_key: String,
    #[serde(rename = "secretKey")]
    pub secret_key: String,
}
