//! Session sub-client: details, profile edits, password and API key rotation.

use crate::auth::ApiKeys;
use crate::client::TenableIo;
use crate::domain::session::{GeneratedKeys, PasswordChange, SessionDetails, SessionEdit};
use crate::error::SdkError;
use crate::validation::check_not_empty;

pub struct Session<'a> {
    pub(crate) client: &'a TenableIo,
}

impl<'a> Session<'a> {
    pub async fn details(&self) -> Result<SessionDetails, SdkError> {
        Ok(self.client.session.get("session", &[]).await?)
    }

    /// Update the current user's display name and/or email.
    pub async fn edit(
        &self,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<SessionDetails, SdkError> {
        if name.is_none() && email.is_none() {
            return Err(SdkError::Validation(
                "edit requires a name or an email".to_string(),
            ));
        }
        let body = SessionEdit { name, email };
        Ok(self.client.session.put("session", &body).await?)
    }

    pub async fn change_password(&self, old: &str, new: &str) -> Result<(), SdkError> {
        check_not_empty("old_password", old)?;
        check_not_empty("new_password", new)?;
        let body = PasswordChange {
            password: new,
            current_password: old,
        };
        let _: serde_json::Value = self.client.session.put("session/chpasswd", &body).await?;
        Ok(())
    }

    /// Generate a new key pair for the current user.
    ///
    /// The platform revokes the old pair, so this client (and its clones)
    /// switch to the new keys before they are returned.
    pub async fn gen_api_keys(&self) -> Result<ApiKeys, SdkError> {
        let generated: GeneratedKeys = self
            .client
            .session
            .put("session/keys", &serde_json::json!({}))
            .await?;
        let keys = ApiKeys::new(generated.access_key, generated.secret_key)?;
        self.client.session.set_keys(&keys).await?;
        tracing::info!(access_key = keys.access_key(), "Rotated API keys");
        Ok(keys)
    }

    /// End an impersonation and return to the original user.
    pub async fn restore(&self) -> Result<(), SdkError> {
        let _: serde_json::Value = self.client.session.delete("session/restore").await?;
        Ok(())
    }
}
