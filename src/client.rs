//! High-level client: `TenableIo` with nested sub-client accessors.
//!
//! Each resource area has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, accessor methods and
//! the raw verb passthroughs.

use crate::auth::ApiKeys;
use crate::domain::agent_groups::client::AgentGroups;
use crate::domain::agents::client::Agents;
use crate::domain::assets::client::Assets;
use crate::domain::audit_log::client::AuditLog;
use crate::domain::folders::client::Folders;
use crate::domain::scanners::client::Scanners;
use crate::domain::scans::client::Scans;
use crate::domain::server::client::Server;
use crate::domain::session::client::Session;
use crate::domain::users::client::Users;
use crate::error::SdkError;
use crate::http::client::{Query, SessionConfig};
use crate::http::{RetryConfig, RetryPolicy, TioSession};
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT, ENV_URL};

use async_lock::RwLock;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::agent_groups::client::AgentGroups as AgentGroupsClient;
pub use crate::domain::agents::client::Agents as AgentsClient;
pub use crate::domain::assets::client::Assets as AssetsClient;
pub use crate::domain::audit_log::client::AuditLog as AuditLogClient;
pub use crate::domain::folders::client::Folders as FoldersClient;
pub use crate::domain::scanners::client::Scanners as ScannersClient;
pub use crate::domain::scans::client::Scans as ScansClient;
pub use crate::domain::server::client::Server as ServerClient;
pub use crate::domain::session::client::Session as SessionClient;
pub use crate::domain::users::client::Users as UsersClient;

/// The primary entry point for the Tenable.io API.
///
/// Provides nested sub-client accessors for each resource area:
/// `tio.scans()`, `tio.folders()`, etc. The raw verbs (`get`, `post`, `put`,
/// `delete`) route straight into the session with no shaping beyond status
/// checking and retries.
#[derive(Clone)]
pub struct TenableIo {
    pub(crate) session: TioSession,
    /// Timezone names accepted by scan schedules; fetched once.
    pub(crate) timezone_cache: Arc<RwLock<Option<Vec<String>>>>,
}

impl TenableIo {
    pub fn builder() -> TenableIoBuilder {
        TenableIoBuilder::default()
    }

    /// Client for the default URL with default retry settings.
    pub fn new(access_key: &str, secret_key: &str) -> Result<Self, SdkError> {
        Self::builder().api_keys(access_key, secret_key).build()
    }

    /// Build from `TIO_ACCESS_KEY`, `TIO_SECRET_KEY` and optionally `TIO_URL`.
    pub fn from_env() -> Result<Self, SdkError> {
        let mut builder = Self::builder().keys(ApiKeys::from_env()?);
        if let Ok(url) = std::env::var(ENV_URL) {
            builder = builder.url(&url);
        }
        builder.build()
    }

    /// The underlying session transport.
    pub fn http(&self) -> &TioSession {
        &self.session
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn agent_groups(&self) -> AgentGroups<'_> {
        AgentGroups { client: self }
    }

    pub fn agents(&self) -> Agents<'_> {
        Agents { client: self }
    }

    pub fn assets(&self) -> Assets<'_> {
        Assets { client: self }
    }

    pub fn audit_log(&self) -> AuditLog<'_> {
        AuditLog { client: self }
    }

    pub fn folders(&self) -> Folders<'_> {
        Folders { client: self }
    }

    pub fn scanners(&self) -> Scanners<'_> {
        Scanners { client: self }
    }

    pub fn scans(&self) -> Scans<'_> {
        Scans { client: self }
    }

    pub fn server(&self) -> Server<'_> {
        Server { client: self }
    }

    pub fn session(&self) -> Session<'_> {
        Session { client: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    // ── Caches ───────────────────────────────────────────────────────────

    /// Timezones the platform accepts, cached after the first non-empty
    /// response.
    pub async fn timezones(&self) -> Result<Vec<String>, SdkError> {
        if let Some(zones) = self.timezone_cache.read().await.as_ref() {
            return Ok(zones.clone());
        }

        let zones = self.scans().timezones().await?;
        if zones.is_empty() {
            tracing::warn!("Timezone list came back empty; not caching");
        } else {
            *self.timezone_cache.write().await = Some(zones.clone());
        }
        Ok(zones)
    }

    /// Clear all cached lookups.
    pub async fn clear_caches(&self) {
        *self.timezone_cache.write().await = None;
    }

    // ── Raw HTTP calls ───────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, SdkError> {
        Ok(self.session.get(path, &[]).await?)
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Query<'_>,
    ) -> Result<T, SdkError> {
        Ok(self.session.get(path, query).await?)
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, SdkError> {
        Ok(self.session.post(path, body).await?)
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, SdkError> {
        Ok(self.session.put(path, body).await?)
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, SdkError> {
        Ok(self.session.delete(path).await?)
    }

    /// Any verb, returning the successful response as-is.
    pub async fn request_raw<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Query<'_>,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<Response, SdkError> {
        Ok(self
            .session
            .request_raw(method, path, query, body, retry)
            .await?)
    }
}

impl std::fmt::Debug for TenableIo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenableIo")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TenableIoBuilder {
    url: String,
    keys: Option<ApiKeys>,
    raw_keys: Option<(String, String)>,
    retry: RetryConfig,
    timeout: Duration,
    ua_identity: Option<String>,
    http_client: Option<Client>,
}

impl Default for TenableIoBuilder {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            keys: None,
            raw_keys: None,
            retry: RetryConfig::default(),
            timeout: DEFAULT_TIMEOUT,
            ua_identity: None,
            http_client: None,
        }
    }
}

impl TenableIoBuilder {
    /// Base URL the API paths are appended onto.
    pub fn url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    /// Access and secret key; validated in [`build`](Self::build).
    pub fn api_keys(mut self, access_key: &str, secret_key: &str) -> Self {
        self.raw_keys = Some((access_key.to_string(), secret_key.to_string()));
        self.keys = None;
        self
    }

    pub fn keys(mut self, keys: ApiKeys) -> Self {
        self.keys = Some(keys);
        self.raw_keys = None;
        self
    }

    /// Number of retries before a request fails.
    pub fn retries(mut self, retries: u32) -> Self {
        self.retry.max_retries = retries;
        self
    }

    /// Linear backoff step used when the server sends no `Retry-After`.
    pub fn backoff(mut self, backoff: Duration) -> Self {
        self.retry.backoff = backoff;
        self
    }

    pub fn retry_config(mut self, config: RetryConfig) -> Self {
        self.retry = config;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Application identifier added to the User-Agent string.
    pub fn ua_identity(mut self, identity: &str) -> Self {
        self.ua_identity = Some(identity.to_string());
        self
    }

    /// Use a pre-configured `reqwest::Client` (proxies, custom TLS, ...).
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<TenableIo, SdkError> {
        let keys = match (self.keys, self.raw_keys) {
            (Some(keys), _) => keys,
            (None, Some((access, secret))) => ApiKeys::new(access, secret)?,
            (None, None) => {
                return Err(SdkError::Auth(crate::error::AuthError::MissingKeys(
                    "no API keys configured".to_string(),
                )))
            }
        };

        let session = TioSession::new(SessionConfig {
            base_url: self.url,
            keys,
            retry: self.retry,
            timeout: self.timeout,
            ua_identity: self.ua_identity,
            http_client: self.http_client,
        })?;

        Ok(TenableIo {
            session,
            timezone_cache: Arc::new(RwLock::new(None)),
        })
    }
}
