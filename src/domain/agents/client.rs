//! Agents sub-client.

use crate::client::TenableIo;
use crate::domain::agents::{Agent, AgentListParams, AgentPage, MAX_AGENT_PAGE};
use crate::error::SdkError;
use crate::validation::{check_choice, check_range};

pub struct Agents<'a> {
    pub(crate) client: &'a TenableIo,
}

impl<'a> Agents<'a> {
    /// One page of agents attached to `scanner_id`.
    pub async fn list(
        &self,
        scanner_id: u64,
        params: &AgentListParams,
    ) -> Result<AgentPage, SdkError> {
        let query = build_list_query(params)?;
        Ok(self
            .client
            .session
            .get(&format!("scanners/{}/agents", scanner_id), &query)
            .await?)
    }

    pub async fn details(&self, scanner_id: u64, agent_id: u64) -> Result<Agent, SdkError> {
        Ok(self
            .client
            .session
            .get(&format!("scanners/{}/agents/{}", scanner_id, agent_id), &[])
            .await?)
    }

    pub async fn unlink(&self, scanner_id: u64, agent_id: u64) -> Result<(), SdkError> {
        let _: serde_json::Value = self
            .client
            .session
            .delete(&format!("scanners/{}/agents/{}", scanner_id, agent_id))
            .await?;
        Ok(())
    }
}

fn build_list_query(params: &AgentListParams) -> Result<Vec<(&'static str, String)>, SdkError> {
    let mut query = Vec::new();

    if let Some(offset) = params.offset {
        query.push(("offset", offset.to_string()));
    }
    if let Some(limit) = params.limit {
        check_range("limit", limit, 1, MAX_AGENT_PAGE)?;
        query.push(("limit", limit.to_string()));
    }
    if !params.sort.is_empty() {
        let directions = ["asc".to_string(), "desc".to_string()];
        let mut parts = Vec::with_capacity(params.sort.len());
        for (field, direction) in &params.sort {
            check_choice("sort direction", direction, &directions)?;
            parts.push(format!("{}:{}", field, direction));
        }
        query.push(("sort", parts.join(",")));
    }
    for filter in &params.filters {
        query.push(("f", filter.to_query()));
    }
    if let Some(ft) = &params.filter_type {
        check_choice("filter_type", ft, &["and".to_string(), "or".to_string()])?;
        query.push(("ft", ft.clone()));
    }
    if let Some(w) = &params.wildcard {
        query.push(("w", w.clone()));
    }

    Ok(query)
}
