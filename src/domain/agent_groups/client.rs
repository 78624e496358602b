//! Agent groups sub-client.

use crate::client::TenableIo;
use crate::domain::agent_groups::{AgentGroup, AgentGroupsResponse};
use crate::error::SdkError;
use crate::validation::check_not_empty;

pub struct AgentGroups<'a> {
    pub(crate) client: &'a TenableIo,
}

impl<'a> AgentGroups<'a> {
    pub async fn list(&self, scanner_id: u64) -> Result<Vec<AgentGroup>, SdkError> {
        let resp: AgentGroupsResponse = self
            .client
            .session
            .get(&format!("scanners/{}/agent-groups", scanner_id), &[])
            .await?;
        Ok(resp.groups)
    }

    pub async fn create(&self, scanner_id: u64, name: &str) -> Result<AgentGroup, SdkError> {
        check_not_empty("name", name)?;
        Ok(self
            .client
            .session
            .post(
                &format!("scanners/{}/agent-groups", scanner_id),
                &serde_json::json!({ "name": name }),
            )
            .await?)
    }

    pub async fn add_agent(
        &self,
        scanner_id: u64,
        group_id: u64,
        agent_id: u64,
    ) -> Result<(), SdkError> {
        let _: serde_json::Value = self
            .client
            .session
            .put(
                &format!(
                    "scanners/{}/agent-groups/{}/agents/{}",
                    scanner_id, group_id, agent_id
                ),
                &serde_json::json!({}),
            )
            .await?;
        Ok(())
    }

    pub async fn delete_agent(
        &self,
        scanner_id: u64,
        group_id: u64,
        agent_id: u64,
    ) -> Result<(), SdkError> {
        let _: serde_json::Value = self
            .client
            .session
            .delete(&format!(
                "scanners/{}/agent-groups/{}/agents/{}",
                scanner_id, group_id, agent_id
            ))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, scanner_id: u64, group_id: u64) -> Result<(), SdkError> {
        let _: serde_json::Value = self
            .client
            .session
            .delete(&format!("scanners/{}/agent-groups/{}", scanner_id, group_id))
            .await?;
        Ok(())
    }
}
