//! API key credentials.
//!
//! Tenable.io authenticates every call with a single header:
//!
//! ```text
//! X-ApiKeys: accessKey=<access>; secretKey=<secret>;
//! ```
//!
//! The secret key is never exposed after construction: there is no accessor
//! and `Debug` redacts it.

use std::fmt;

use reqwest::header::HeaderValue;

use crate::error::AuthError;
use crate::network::{ENV_ACCESS_KEY, ENV_SECRET_KEY};

/// An access/secret key pair.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKeys {
    access_key: String,
    secret_key: String,
}

impl ApiKeys {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Result<Self, AuthError> {
        let access_key = access_key.into();
        let secret_key = secret_key.into();
        if access_key.trim().is_empty() {
            return Err(AuthError::MissingKeys("access key is empty".to_string()));
        }
        if secret_key.trim().is_empty() {
            return Err(AuthError::MissingKeys("secret key is empty".to_string()));
        }
        Ok(Self {
            access_key,
            secret_key,
        })
    }

    /// Read `TIO_ACCESS_KEY` and `TIO_SECRET_KEY`.
    pub fn from_env() -> Result<Self, AuthError> {
        let access = std::env::var(ENV_ACCESS_KEY)
            .map_err(|_| AuthError::MissingKeys(format!("{} not set", ENV_ACCESS_KEY)))?;
        let secret = std::env::var(ENV_SECRET_KEY)
            .map_err(|_| AuthError::MissingKeys(format!("{} not set", ENV_SECRET_KEY)))?;
        Self::new(access, secret)
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Value of the `X-ApiKeys` header.
    pub fn header_value(&self) -> String {
        format!(
            "accessKey={}; secretKey={};",
            self.access_key, self.secret_key
        )
    }

    /// Header value marked sensitive so reqwest keeps it out of its own debug output.
    pub(crate) fn to_header(&self) -> Result<HeaderValue, AuthError> {
        let mut value =
            HeaderValue::from_str(&self.header_value()).map_err(|_| AuthError::InvalidKeys)?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeys")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
