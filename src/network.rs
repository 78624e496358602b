//! Network URL, header and default constants for the Tenable.io API.

use std::time::Duration;

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://cloud.tenable.com";

/// Default number of retries before a request fails.
pub const DEFAULT_RETRIES: u32 = 3;

/// Default linear backoff step when the server sends no `Retry-After`.
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(1);

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Auth header carrying the access/secret key pair.
pub const HEADER_API_KEYS: &str = "X-ApiKeys";

/// Response header identifying a request server-side.
pub const HEADER_REQUEST_UUID: &str = "X-Request-Uuid";

/// Request header echoing the uuid of the failed attempt on retry.
pub const HEADER_LAST_REQUEST_UUID: &str = "X-Tio-Last-Request-Uuid";

/// Request header carrying how many times this call has been retried.
pub const HEADER_RETRY_COUNT: &str = "X-Tio-Retry-Count";

/// Environment variable names read by `from_env()`.
pub const ENV_ACCESS_KEY: &str = "TIO_ACCESS_KEY";
pub const ENV_SECRET_KEY: &str = "TIO_SECRET_KEY";
pub const ENV_URL: &str = "TIO_URL";
