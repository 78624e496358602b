//! Users sub-client.

use crate::client::TenableIo;
use crate::domain::users::{PermissionLevel, User, UserCreate, UsersResponse};
use crate::error::SdkError;
use crate::validation::{check_choice, check_not_empty};

pub struct Users<'a> {
    pub(crate) client: &'a TenableIo,
}

impl<'a> Users<'a> {
    pub async fn list(&self) -> Result<Vec<User>, SdkError> {
        let resp: UsersResponse = self.client.session.get("users", &[]).await?;
        Ok(resp.users)
    }

    pub async fn details(&self, id: u64) -> Result<User, SdkError> {
        Ok(self
            .client
            .session
            .get(&format!("users/{}", id), &[])
            .await?)
    }

    pub async fn create(&self, user: &UserCreate) -> Result<User, SdkError> {
        check_not_empty("username", &user.username)?;
        check_not_empty("password", &user.password)?;
        let levels: Vec<u32> = PermissionLevel::ALL.iter().map(|p| p.as_u32()).collect();
        check_choice("permissions", &user.permissions, &levels)?;
        Ok(self.client.session.post("users", user).await?)
    }

    pub async fn delete(&self, id: u64) -> Result<(), SdkError> {
        let _: serde_json::Value = self
            .client
            .session
            .delete(&format!("users/{}", id))
            .await?;
        Ok(())
    }

    /// Enable or disable an account.
    pub async fn enabled(&self, id: u64, enabled: bool) -> Result<User, SdkError> {
        Ok(self
            .client
            .session
            .put(
                &format!("users/{}/enabled", id),
                &serde_json::json!({ "enabled": enabled }),
            )
            .await?)
    }
}
