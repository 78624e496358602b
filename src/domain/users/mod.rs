//! Users domain: platform user accounts.

pub mod client;

use serde::{Deserialize, Serialize};

use crate::shared::serde_util::int_bool;

/// Role a user holds, sent on the wire as its numeric level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionLevel {
    BasicUser,
    ScanOperator,
    StandardUser,
    ScanManager,
    Administrator,
}

impl PermissionLevel {
    pub const ALL: [PermissionLevel; 5] = [
        PermissionLevel::BasicUser,
        PermissionLevel::ScanOperator,
        PermissionLevel::StandardUser,
        PermissionLevel::ScanManager,
        PermissionLevel::Administrator,
    ];

    pub fn as_u32(&self) -> u32 {
        match self {
            PermissionLevel::BasicUser => 16,
            PermissionLevel::ScanOperator => 24,
            PermissionLevel::StandardUser => 32,
            PermissionLevel::ScanManager => 40,
            PermissionLevel::Administrator => 64,
        }
    }

    pub fn from_u32(level: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_u32() == level)
    }
}

impl std::fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub permissions: u32,
    #[serde(default, deserialize_with = "int_bool::deserialize")]
    pub enabled: bool,
    #[serde(rename = "type", default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub last_login: Option<i64>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    pub fn permission_level(&self) -> Option<PermissionLevel> {
        PermissionLevel::from_u32(self.permissions)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UsersResponse {
    #[serde(default)]
    pub users: Vec<User>,
}

/// Body of `POST users`.
#[derive(Debug, Clone, Serialize)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
    pub permissions: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub user_type: String,
}

impl UserCreate {
    pub fn new(username: &str, password: &str, level: PermissionLevel) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            permissions: level.as_u32(),
            name: None,
            email: None,
            user_type: "local".to_string(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }
}
