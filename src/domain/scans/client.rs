//! Scans sub-client: listing, creation and run control.

use chrono::{DateTime, Utc};

use crate::client::TenableIo;
use crate::domain::scans::{
    LaunchResponse, Scan, ScanCreate, ScanEnvelope, ScansResponse, TimezonesResponse,
};
use crate::error::SdkError;
use crate::validation::{check_choice, check_not_empty};

pub struct Scans<'a> {
    pub(crate) client: &'a TenableIo,
}

impl<'a> Scans<'a> {
    /// List scans, optionally limited to one folder and/or to scans modified
    /// since a point in time. An empty folder yields an empty list.
    pub async fn list(
        &self,
        folder_id: Option<u64>,
        last_modified: Option<DateTime<Utc>>,
    ) -> Result<Vec<Scan>, SdkError> {
        let mut query = Vec::new();
        if let Some(id) = folder_id {
            query.push(("folder_id", id.to_string()));
        }
        if let Some(ts) = last_modified {
            query.push(("last_modification_date", ts.timestamp().to_string()));
        }
        let resp: ScansResponse = self.client.session.get("scans", &query).await?;
        Ok(resp.scans.unwrap_or_default())
    }

    /// Full scan details (info, hosts, vulnerabilities, history) as returned.
    pub async fn details(&self, id: u64) -> Result<serde_json::Value, SdkError> {
        Ok(self
            .client
            .session
            .get(&format!("scans/{}", id), &[])
            .await?)
    }

    /// Create a scan. A scheduled scan's timezone is checked against the
    /// platform's list before the request is sent.
    pub async fn create(&self, scan: &ScanCreate) -> Result<Scan, SdkError> {
        check_not_empty("template_uuid", &scan.template_uuid)?;
        check_not_empty("name", &scan.name)?;
        if let Some(tz) = &scan.timezone {
            let zones = self.client.timezones().await?;
            check_choice("timezone", tz, &zones)?;
        }

        let resp: ScanEnvelope = self
            .client
            .session
            .post("scans", &scan.to_payload())
            .await?;
        Ok(resp.scan)
    }

    /// Launch a scan, returning the uuid of the new run. `alt_targets`
    /// replaces the configured targets for this run only.
    pub async fn launch(&self, id: u64, alt_targets: &[String]) -> Result<String, SdkError> {
        let body = if alt_targets.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::json!({ "alt_targets": alt_targets })
        };
        let resp: LaunchResponse = self
            .client
            .session
            .post(&format!("scans/{}/launch", id), &body)
            .await?;
        Ok(resp.scan_uuid)
    }

    pub async fn pause(&self, id: u64) -> Result<(), SdkError> {
        self.control(id, "pause").await
    }

    pub async fn resume(&self, id: u64) -> Result<(), SdkError> {
        self.control(id, "resume").await
    }

    pub async fn stop(&self, id: u64) -> Result<(), SdkError> {
        self.control(id, "stop").await
    }

    pub async fn delete(&self, id: u64) -> Result<(), SdkError> {
        let _: serde_json::Value = self
            .client
            .session
            .delete(&format!("scans/{}", id))
            .await?;
        Ok(())
    }

    /// Enable or disable the scan's schedule.
    pub async fn schedule(&self, id: u64, enabled: bool) -> Result<serde_json::Value, SdkError> {
        Ok(self
            .client
            .session
            .put(
                &format!("scans/{}/schedule", id),
                &serde_json::json!({ "enabled": enabled }),
            )
            .await?)
    }

    pub async fn set_read_status(&self, id: u64, read: bool) -> Result<(), SdkError> {
        let _: serde_json::Value = self
            .client
            .session
            .put(
                &format!("scans/{}/status", id),
                &serde_json::json!({ "read": read }),
            )
            .await?;
        Ok(())
    }

    /// Timezone names accepted by scan schedules. Uncached; prefer
    /// [`TenableIo::timezones`] for validation.
    pub async fn timezones(&self) -> Result<Vec<String>, SdkError> {
        let resp: TimezonesResponse = self.client.session.get("scans/timezones", &[]).await?;
        Ok(resp.timezones.into_iter().map(|tz| tz.value).collect())
    }

    async fn control(&self, id: u64, action: &str) -> Result<(), SdkError> {
        tracing::debug!(scan_id = id, action, "Scan control");
        let _: serde_json::Value = self
            .client
            .session
            .post(&format!("scans/{}/{}", id, action), &serde_json::json!({}))
            .await?;
        Ok(())
    }
}
