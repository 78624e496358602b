//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use tenable_io::client::TenableIo;

/// Route library tracing to the test writer; `RUST_LOG=tenable_io=debug` to see it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Client pointed at a mock server with instant backoff.
pub fn client(url: &str) -> TenableIo {
    client_with_retries(url, 3)
}

pub fn client_with_retries(url: &str, retries: u32) -> TenableIo {
    init_tracing();
    TenableIo::builder()
        .url(url)
        .api_keys("ACCESS", "SECRET")
        .retries(retries)
        .backoff(Duration::ZERO)
        .build()
        .expect("client should build")
}
