//! Folders sub-client.

use crate::client::TenableIo;
use crate::domain::folders::{CreatedId, Folder, FoldersResponse};
use crate::error::SdkError;
use crate::validation::check_not_empty;

pub struct Folders<'a> {
    pub(crate) client: &'a TenableIo,
}

impl<'a> Folders<'a> {
    pub async fn list(&self) -> Result<Vec<Folder>, SdkError> {
        let resp: FoldersResponse = self.client.session.get("folders", &[]).await?;
        Ok(resp.folders)
    }

    /// Create a folder, returning its id.
    pub async fn create(&self, name: &str) -> Result<u64, SdkError> {
        check_not_empty("name", name)?;
        let resp: CreatedId = self
            .client
            .session
            .post("folders", &serde_json::json!({ "name": name }))
            .await?;
        Ok(resp.id)
    }

    pub async fn edit(&self, id: u64, name: &str) -> Result<(), SdkError> {
        check_not_empty("name", name)?;
        let _: serde_json::Value = self
            .client
            .session
            .put(&format!("folders/{}", id), &serde_json::json!({ "name": name }))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: u64) -> Result<(), SdkError> {
        let _: serde_json::Value = self
            .client
            .session
            .delete(&format!("folders/{}", id))
            .await?;
        Ok(())
    }
}
