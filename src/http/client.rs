//! Session transport: `TioSession`.
//!
//! Every request goes through [`TioSession::request_raw`], which injects the
//! `X-ApiKeys` header, retries rate-limited and transient failures, and tags
//! retried attempts so the server can chain them in its logs:
//!
//! - `X-Tio-Retry-Count: <n>`: how many times this call has been retried.
//! - `X-Tio-Last-Request-Uuid: <uuid>`: the `X-Request-Uuid` the server
//!   returned for the failed attempt, when it sent one.

use std::sync::Arc;
use std::time::Duration;

use async_lock::RwLock;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, RETRY_AFTER, USER_AGENT};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::ApiKeys;
use crate::error::{HttpError, SdkError};
use crate::http::retry::{parse_retry_after, RetryConfig, RetryPolicy};
use crate::network::{
    DEFAULT_API_URL, DEFAULT_TIMEOUT, HEADER_API_KEYS, HEADER_LAST_REQUEST_UUID,
    HEADER_REQUEST_UUID, HEADER_RETRY_COUNT,
};

/// Query string pairs appended to a request.
pub type Query<'a> = &'a [(&'a str, String)];

/// Everything needed to open a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub base_url: String,
    pub keys: ApiKeys,
    pub retry: RetryConfig,
    pub timeout: Duration,
    /// Application identifier prepended to the User-Agent.
    pub ua_identity: Option<String>,
    /// Pre-built client to use instead of building one.
    pub http_client: Option<Client>,
}

impl SessionConfig {
    pub fn new(keys: ApiKeys) -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            keys,
            retry: RetryConfig::default(),
            timeout: DEFAULT_TIMEOUT,
            ua_identity: None,
            http_client: None,
        }
    }
}

/// Authenticated HTTP session for the Tenable.io REST API.
#[derive(Clone)]
pub struct TioSession {
    base_url: String,
    client: Client,
    retry: RetryConfig,
    /// Current `X-ApiKeys` value, shared by clones and replaced on key rotation.
    api_keys: Arc<RwLock<HeaderValue>>,
    api_keys_header: HeaderName,
    /// Headers sent on every request when the client was supplied by the
    /// caller and so carries none of ours as defaults.
    per_request_headers: Option<HeaderMap>,
}

impl TioSession {
    pub fn new(config: SessionConfig) -> Result<Self, SdkError> {
        let api_keys_header = header_name(HEADER_API_KEYS)?;
        let api_keys = config.keys.to_header()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let user_agent = user_agent(config.ua_identity.as_deref());
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&user_agent).map_err(|e| HttpError::InvalidHeader {
                name: USER_AGENT.to_string(),
                reason: e.to_string(),
            })?,
        );

        let (client, per_request_headers) = match config.http_client {
            Some(client) => (client, Some(headers)),
            None => {
                let client = Client::builder()
                    .timeout(config.timeout)
                    .pool_max_idle_per_host(10)
                    .default_headers(headers)
                    .build()
                    .map_err(HttpError::from)?;
                (client, None)
            }
        };

        tracing::debug!(base_url = %config.base_url, "Opened Tenable.io session");

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            retry: config.retry,
            api_keys: Arc::new(RwLock::new(api_keys)),
            api_keys_header,
            per_request_headers,
        })
    }

    /// Authenticate subsequent requests (from this session and its clones)
    /// with `keys`.
    pub async fn set_keys(&self, keys: &ApiKeys) -> Result<(), SdkError> {
        let value = keys.to_header()?;
        *self.api_keys.write().await = value;
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Resolve an API path against the base URL. Absolute URLs pass through.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // ── Verb primitives ──────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: Query<'_>) -> Result<T, HttpError> {
        self.request::<T, ()>(Method::GET, path, query, None, RetryPolicy::Session)
            .await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.request(Method::POST, path, &[], Some(body), RetryPolicy::Session)
            .await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.request(Method::PUT, path, &[], Some(body), RetryPolicy::Session)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.request::<T, ()>(Method::DELETE, path, &[], None, RetryPolicy::Session)
            .await
    }

    /// Send a request and decode the JSON body. Empty bodies decode as `null`.
    pub async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Query<'_>,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let resp = self.request_raw(method, path, query, body, retry).await?;
        decode(resp).await
    }

    /// Send a request and hand back the successful response untouched.
    pub async fn request_raw<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Query<'_>,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<Response, HttpError> {
        let config = match retry {
            RetryPolicy::None => RetryConfig::disabled(),
            RetryPolicy::Session => self.retry.clone(),
            RetryPolicy::Custom(c) => c,
        };
        let url = self.url(path);

        let mut retries: u32 = 0;
        let mut last_request_uuid: Option<String> = None;

        loop {
            let api_keys = self.api_keys.read().await.clone();
            let mut req = self
                .client
                .request(method.clone(), &url)
                .header(self.api_keys_header.clone(), api_keys);
            if let Some(headers) = &self.per_request_headers {
                req = req.headers(headers.clone());
            }
            if !query.is_empty() {
                req = req.query(query);
            }
            if let Some(b) = body {
                req = req.json(b);
            }
            if retries > 0 {
                req = req.header(HEADER_RETRY_COUNT, retries.to_string());
                if let Some(uuid) = &last_request_uuid {
                    req = req.header(HEADER_LAST_REQUEST_UUID, uuid.as_str());
                }
            }

            tracing::debug!(method = %method, url = %url, retries, "Sending request");

            let resp = match req.send().await {
                Ok(resp) => resp,
                Err(e) => {
                    let transient = e.is_connect() || e.is_timeout();
                    if transient && retries < config.max_retries {
                        retries += 1;
                        let delay = config.delay_for_retry(retries, None);
                        tracing::warn!(
                            retry = retries,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "Retrying {} {} after transport error",
                            method,
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        continue;
                    }
                    return Err(HttpError::Reqwest(e));
                }
            };

            let status = resp.status();
            if status.is_success() {
                return Ok(resp);
            }

            let status_code = status.as_u16();
            if config.is_retryable_status(status_code) {
                if let Some(uuid) = header_string(&resp, HEADER_REQUEST_UUID) {
                    last_request_uuid = Some(uuid);
                }

                if retries < config.max_retries {
                    retries += 1;
                    let retry_after = resp
                        .headers()
                        .get(RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(parse_retry_after);
                    let delay = config.delay_for_retry(retries, retry_after);
                    tracing::warn!(
                        retry = retries,
                        max = config.max_retries,
                        status = status_code,
                        delay_ms = delay.as_millis() as u64,
                        request_uuid = last_request_uuid.as_deref().unwrap_or(""),
                        "Retrying {} {}",
                        method,
                        url
                    );
                    futures_timer::Delay::new(delay).await;
                    continue;
                }

                if config.max_retries > 0 {
                    return Err(HttpError::RetriesExhausted {
                        attempts: retries + 1,
                        last_status: status_code,
                        last_request_uuid,
                    });
                }
            }

            let body_text = resp.text().await.unwrap_or_default();
            tracing::debug!(status = status_code, url = %url, "Request failed");
            return Err(HttpError::from_status(status_code, body_text));
        }
    }
}

impl std::fmt::Debug for TioSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TioSession")
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

/// `"[<identity> ]tenable-io/<version> (Rust)"`.
pub fn user_agent(identity: Option<&str>) -> String {
    let base = format!("tenable-io/{} (Rust)", env!("CARGO_PKG_VERSION"));
    match identity.map(str::trim).filter(|i| !i.is_empty()) {
        Some(identity) => format!("{} {}", identity, base),
        None => base,
    }
}

fn header_name(name: &str) -> Result<HeaderName, HttpError> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|e| HttpError::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

fn header_string(resp: &Response, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, HttpError> {
    let bytes = resp.bytes().await?;
    let payload: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &bytes
    };
    serde_json::from_slice(payload).map_err(|e| HttpError::Decode(e.to_string()))
}
