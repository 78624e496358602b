//! Scanners sub-client.

use crate::client::TenableIo;
use crate::domain::scanners::{Scanner, ScannersResponse};
use crate::error::SdkError;

pub struct Scanners<'a> {
    pub(crate) client: &'a TenableIo,
}

impl<'a> Scanners<'a> {
    pub async fn list(&self) -> Result<Vec<Scanner>, SdkError> {
        let resp: ScannersResponse = self.client.session.get("scanners", &[]).await?;
        Ok(resp.scanners)
    }

    pub async fn details(&self, id: u64) -> Result<Scanner, SdkError> {
        Ok(self
            .client
            .session
            .get(&format!("scanners/{}", id), &[])
            .await?)
    }

    pub async fn delete(&self, id: u64) -> Result<(), SdkError> {
        let _: serde_json::Value = self
            .client
            .session
            .delete(&format!("scanners/{}", id))
            .await?;
        Ok(())
    }

    /// Link or unlink a scanner. The API takes the flag as `1`/`0`.
    pub async fn toggle_link_state(&self, id: u64, linked: bool) -> Result<(), SdkError> {
        let _: serde_json::Value = self
            .client
            .session
            .put(
                &format!("scanners/{}/link", id),
                &serde_json::json!({ "link": u8::from(linked) }),
            )
            .await?;
        Ok(())
    }
}
