//! Server sub-client.

use crate::client::TenableIo;
use crate::domain::server::{ServerProperties, ServerStatus};
use crate::error::SdkError;

pub struct Server<'a> {
    pub(crate) client: &'a TenableIo,
}

impl<'a> Server<'a> {
    pub async fn status(&self) -> Result<ServerStatus, SdkError> {
        Ok(self.client.session.get("server/status", &[]).await?)
    }

    pub async fn properties(&self) -> Result<ServerProperties, SdkError> {
        Ok(self.client.session.get("server/properties", &[]).await?)
    }
}
