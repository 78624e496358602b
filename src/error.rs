//! Unified SDK error types.

use serde::Deserialize;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

}

impl SdkError {
    /// HTTP status carried by the underlying error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Permission denied: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Could not decode response body: {0}")]
    Decode(String),

    #[error("Invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error(
        "Retries exhausted after {attempts} attempts (last status {last_status}, request uuid {})",
        .last_request_uuid.as_deref().unwrap_or("none")
    )]
    RetriesExhausted {
        attempts: u32,
        last_status: u16,
        last_request_uuid: Option<String>,
    },
}

impl HttpError {
    /// Build the error for a non-success status, given the response body.
    pub(crate) fn from_status(status: u16, body: String) -> Self {
        let message = ErrorBody::message_from(&body);
        match status {
            400 => HttpError::BadRequest(message),
            401 => HttpError::Unauthorized(message),
            403 => HttpError::Forbidden(message),
            404 => HttpError::NotFound(message),
            409 => HttpError::Conflict(message),
            429 => HttpError::RateLimited(message),
            500..=599 => HttpError::ServerError {
                status,
                body: message,
            },
            _ => HttpError::UnexpectedStatus {
                status,
                body: message,
            },
        }
    }

    /// HTTP status associated with this error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            HttpError::BadRequest(_) => Some(400),
            HttpError::Unauthorized(_) => Some(401),
            HttpError::Forbidden(_) => Some(403),
            HttpError::NotFound(_) => Some(404),
            HttpError::Conflict(_) => Some(409),
            HttpError::RateLimited(_) => Some(429),
            HttpError::ServerError { status, .. } => Some(*status),
            HttpError::UnexpectedStatus { status, .. } => Some(*status),
            HttpError::RetriesExhausted { last_status, .. } => Some(*last_status),
            HttpError::Decode(_) | HttpError::InvalidHeader { .. } => None,
        }
    }
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing API keys: {0}")]
    MissingKeys(String),

    #[error("API keys contain characters not allowed in an HTTP header")]
    InvalidKeys,
}

/// Error body shape returned by the platform.
#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    /// The body's `message`, then its `error`, else the raw text.
    fn message_from(body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .unwrap_or_else(|| body.to_string())
    }
}
