//! Audit log domain: container audit events.

pub mod client;

use serde::{Deserialize, Serialize};

/// Largest number of events one call may request.
pub const MAX_EVENTS: u32 = 5000;

/// Operators the events endpoint understands.
pub const FILTER_OPERATORS: [&str; 5] = ["eq", "neq", "gt", "lt", "match"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: String,
    pub action: String,
    #[serde(default)]
    pub crud: Option<String>,
    #[serde(default)]
    pub is_failure: bool,
    #[serde(default)]
    pub is_anonymous: Option<bool>,
    #[serde(default)]
    pub received: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub actor: Option<AuditParty>,
    #[serde(default)]
    pub target: Option<AuditParty>,
    #[serde(default)]
    pub fields: Vec<serde_json::Value>,
}

/// Actor or target of an audit event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditParty {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub party_type: Option<String>,
}

/// `field.operator:value`, e.g. `("date", "gt", "2018-01-01")`.
#[derive(Debug, Clone, PartialEq)]
pub struct EventFilter {
    pub field: String,
    pub operator: String,
    pub value: String,
}

impl EventFilter {
    pub fn new(field: &str, operator: &str, value: &str) -> Self {
        Self {
            field: field.to_string(),
            operator: operator.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn to_query(&self) -> String {
        format!("{}.{}:{}", self.field, self.operator, self.value)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct EventsResponse {
    #[serde(default)]
    pub events: Vec<AuditEvent>,
}
