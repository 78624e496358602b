//! Retry policies for HTTP requests.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::network::{DEFAULT_BACKOFF, DEFAULT_RETRIES};

/// Retry policy for an HTTP request.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// Single attempt; a retryable status surfaces as its mapped error.
    None,
    /// Use the session-wide [`RetryConfig`]. Default for every call.
    #[default]
    Session,
    /// Per-call override.
    Custom(RetryConfig),
}

/// Configuration for retry behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Linear backoff step: retry `n` waits `n * backoff` unless the server
    /// sends `Retry-After`.
    pub backoff: Duration,
    /// Upper bound for any single wait, including `Retry-After`.
    pub max_delay: Duration,
    /// Whether to add ±25% jitter to computed (not server-provided) delays.
    pub jitter: bool,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_RETRIES,
            backoff: DEFAULT_BACKOFF,
            max_delay: Duration::from_secs(30),
            jitter: false,
            retryable_statuses: vec![429, 501, 502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// A config that never retries.
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn is_retryable_status(&self, status: u16) -> bool {
        self.retryable_statuses.contains(&status)
    }

    /// Delay before retry number `retry` (1-based).
    pub fn delay_for_retry(&self, retry: u32, retry_after: Option<Duration>) -> Duration {
        if let Some(server_delay) = retry_after {
            return server_delay.min(self.max_delay);
        }

        let base = self.backoff.as_millis() as f64 * retry as f64;
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }
}

/// Parse a `Retry-After` header: delta-seconds or an HTTP-date.
pub fn parse_retry_after(value: &str) -> Option<Duration> {
    let value = value.trim();
    if let Ok(secs) = value.parse::<f64>() {
        if secs.is_finite() && secs >= 0.0 {
            // Delta-seconds is unbounded; saturate and let the caller cap it.
            return Some(Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX));
        }
        return None;
    }

    let at = DateTime::parse_from_rfc2822(value).ok()?;
    let wait = at.with_timezone(&Utc) - Utc::now();
    Some(wait.to_std().unwrap_or(Duration::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_policy_default_is_session() {
        assert!(matches!(RetryPolicy::default(), RetryPolicy::Session));
    }

    #[test]
    fn test_default_statuses() {
        let config = RetryConfig::default();
        assert_eq!(config.max_retries, 3);
        for status in [429, 501, 502, 503, 504] {
            assert!(config.is_retryable_status(status), "{status}");
        }
        assert!(!config.is_retryable_status(500));
        assert!(!config.is_retryable_status(404));
    }

    #[test]
    fn test_delay_is_linear() {
        let config = RetryConfig::default().with_backoff(Duration::from_millis(100));
        assert_eq!(config.delay_for_retry(1, None).as_millis(), 100);
        assert_eq!(config.delay_for_retry(2, None).as_millis(), 200);
        assert_eq!(config.delay_for_retry(3, None).as_millis(), 300);
    }

    #[test]
    fn test_delay_caps_at_max() {
        let config = RetryConfig {
            backoff: Duration::from_secs(20),
            max_delay: Duration::from_secs(30),
            ..RetryConfig::default()
        };
        assert_eq!(config.delay_for_retry(3, None), Duration::from_secs(30));
        assert_eq!(
            config.delay_for_retry(1, Some(Duration::from_secs(120))),
            Duration::from_secs(30)
        );
    }

    #[test]
    fn test_retry_after_wins_over_backoff() {
        let config = RetryConfig::default();
        assert_eq!(
            config.delay_for_retry(2, Some(Duration::from_secs(5))),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let config = RetryConfig::default()
            .with_backoff(Duration::from_millis(1000))
            .with_jitter(true);
        for _ in 0..50 {
            let ms = config.delay_for_retry(1, None).as_millis();
            assert!((750..=1250).contains(&ms), "{ms}");
        }
    }

    #[test]
    fn test_parse_retry_after() {
        assert_eq!(parse_retry_after("3"), Some(Duration::from_secs(3)));
        assert_eq!(parse_retry_after(" 0 "), Some(Duration::ZERO));
        assert_eq!(parse_retry_after("1.5"), Some(Duration::from_millis(1500)));
        assert_eq!(parse_retry_after("-1"), None);
        assert_eq!(parse_retry_after("soon"), None);
        assert_eq!(
            parse_retry_after("Wed, 21 Oct 2015 07:28:00 GMT"),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn test_parse_retry_after_huge_value_saturates() {
        assert_eq!(
            parse_retry_after("18446744073709551616"),
            Some(Duration::MAX)
        );
        assert_eq!(parse_retry_after("1e300"), Some(Duration::MAX));

        let config = RetryConfig::default();
        let wait = parse_retry_after("18446744073709551616");
        assert_eq!(config.delay_for_retry(1, wait), config.max_delay);
    }

    #[test]
    fn test_disabled() {
        assert_eq!(RetryConfig::disabled().max_retries, 0);
    }
}
