//! Agents domain: Nessus agents linked to a scanner.

pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::serde_util::from_epoch_secs;

/// Agents live under this scanner id unless the container says otherwise.
pub const DEFAULT_AGENT_SCANNER: u64 = 1;

/// Largest page the agents endpoint will return.
pub const MAX_AGENT_PAGE: u32 = 5000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: u64,
    #[serde(default)]
    pub uuid: Option<String>,
    pub name: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub distro: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub core_version: Option<String>,
    #[serde(default)]
    pub last_connect: Option<i64>,
    #[serde(default)]
    pub linked_on: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Agent {
    pub fn last_connected_at(&self) -> Option<DateTime<Utc>> {
        self.last_connect.and_then(from_epoch_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
    #[serde(default)]
    pub sort: Option<String>,
}

/// One page of `GET scanners/{id}/agents`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentPage {
    #[serde(default)]
    pub agents: Vec<Agent>,
    pub pagination: Pagination,
}

/// `field:operator:value`, e.g. `("platform", "match", "LINUX")`.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentFilter {
    pub field: String,
    pub operator: String,
    pub value: String,
}

impl AgentFilter {
    pub fn new(field: &str, operator: &str, value: &str) -> Self {
        Self {
            field: field.to_string(),
            operator: operator.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn to_query(&self) -> String {
        format!("{}:{}:{}", self.field, self.operator, self.value)
    }
}

/// Query parameters for listing agents.
#[derive(Debug, Clone, Default)]
pub struct AgentListParams {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    /// `(field, "asc" | "desc")` pairs.
    pub sort: Vec<(String, String)>,
    pub filters: Vec<AgentFilter>,
    /// `"and"` or `"or"`; how multiple filters combine.
    pub filter_type: Option<String>,
    /// Free-text match across agent fields.
    pub wildcard: Option<String>,
}

impl AgentListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn sort(mut self, field: &str, direction: &str) -> Self {
        self.sort.push((field.to_string(), direction.to_string()));
        self
    }

    pub fn filter(mut self, filter: AgentFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn filter_type(mut self, filter_type: &str) -> Self {
        self.filter_type = Some(filter_type.to_string());
        self
    }

    pub fn wildcard(mut self, text: &str) -> Self {
        self.wildcard = Some(text.to_string());
        self
    }
}
