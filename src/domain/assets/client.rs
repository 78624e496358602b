//! Assets sub-client: listing, details and imports.

use crate::client::TenableIo;
use crate::domain::assets::{
    Asset, AssetImport, AssetImportJob, AssetsResponse, ImportJobsResponse, ImportResponse,
};
use crate::error::SdkError;
use crate::shared::path_segment;
use crate::validation::check_not_empty;

pub struct Assets<'a> {
    pub(crate) client: &'a TenableIo,
}

impl<'a> Assets<'a> {
    pub async fn list(&self) -> Result<Vec<Asset>, SdkError> {
        let resp: AssetsResponse = self.client.session.get("assets", &[]).await?;
        Ok(resp.assets)
    }

    pub async fn details(&self, uuid: &str) -> Result<serde_json::Value, SdkError> {
        check_not_empty("uuid", uuid)?;
        Ok(self
            .client
            .session
            .get(&format!("assets/{}", path_segment(uuid)), &[])
            .await?)
    }

    /// Queue an asset import, returning the import job uuid.
    pub async fn import(&self, assets: &[AssetImport], source: &str) -> Result<String, SdkError> {
        check_not_empty("source", source)?;
        if assets.is_empty() {
            return Err(SdkError::Validation("no assets to import".to_string()));
        }
        if let Some(pos) = assets.iter().position(|a| !a.is_identifiable()) {
            return Err(SdkError::Validation(format!(
                "asset {} has no fqdn, ipv4, netbios_name or mac_address",
                pos
            )));
        }

        let resp: ImportResponse = self
            .client
            .session
            .post(
                "import/assets",
                &serde_json::json!({ "assets": assets, "source": source }),
            )
            .await?;
        Ok(resp.asset_import_job_uuid)
    }

    pub async fn list_import_jobs(&self) -> Result<Vec<AssetImportJob>, SdkError> {
        let resp: ImportJobsResponse = self.client.session.get("import/asset-jobs", &[]).await?;
        Ok(resp.asset_import_jobs)
    }

    pub async fn import_job_details(&self, job_id: &str) -> Result<AssetImportJob, SdkError> {
        check_not_empty("job_id", job_id)?;
        Ok(self
            .client
            .session
            .get(&format!("import/asset-jobs/{}", path_segment(job_id)), &[])
            .await?)
    }
}
