//! API location for the extraction endpoints.
//!
//! The base URL is baked in at build time from `HCL_API_BASE_URL` because the
//! WASM bundle has no runtime environment to read from.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::types::Endpoint;

/// Address the extraction backend listens on when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8003";

/// Client configuration provided through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ClientConfig {
    /// Build a config for `api_base_url`. Trailing slashes are trimmed and a
    /// blank value falls back to [`DEFAULT_API_BASE_URL`].
    pub fn new(api_base_url: &str) -> Self {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self { api_base_url: api_base_url.to_owned() }
    }

    /// Read `HCL_API_BASE_URL` from the compile-time environment.
    pub fn from_build_env() -> Self {
        option_env!("HCL_API_BASE_URL").map_or_else(Self::default, Self::new)
    }

    /// Absolute URL for one of the extraction endpoints.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.api_base_url, endpoint.path())
    }
}
