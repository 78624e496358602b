//! HTTP session layer: `TioSession` with retry policies and request correlation.

pub mod client;
pub mod retry;

pub use client::{SessionConfig, TioSession};
pub use retry::{RetryConfig, RetryPolicy};
