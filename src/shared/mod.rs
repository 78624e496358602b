//! Shared helpers used across all domain modules.

pub mod serde_util;

use std::borrow::Cow;

/// Percent-encode a caller-supplied value for use as one URL path segment.
pub fn path_segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}
