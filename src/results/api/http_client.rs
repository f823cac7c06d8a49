//! HTTP client creation and configuration utilities

use crate::constants::{HTTP_POOL_MAX_IDLE_PER_HOST, MAX_REDIRECTS};
use reqwest::Client;
use reqwest::redirect::Policy;
use std::time::Duration;

/// Creates an HTTP client with connection pooling, a per-request timeout and a
/// redirect policy deep enough to follow smash.gg short links.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .redirect(Policy::limited(MAX_REDIRECTS))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}
