//! HTTP client for the extraction endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: [`HttpExtractionApi`] returns
//! [`ApiError::Unavailable`] since the endpoints are only called from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an [`ApiError`] so the chat state can settle
//! the submission on one path. Nothing here panics.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, Endpoint, ExtractionRequest, parse_response_body};
use crate::config::ClientConfig;

/// A source of answers for a prompt. The page talks to the backend through
/// [`HttpExtractionApi`]; tests substitute a canned implementation.
#[allow(async_fn_in_trait)]
pub trait ExtractionApi {
    /// Post `request` to `endpoint` and return the `raspuns_final` text.
    async fn extract(&self, endpoint: Endpoint, request: &ExtractionRequest) -> Result<String, ApiError>;
}

/// Buffered JSON-over-HTTP implementation. No timeout, no retry.
#[derive(Clone, Debug)]
pub struct HttpExtractionApi {
    config: ClientConfig,
}

impl HttpExtractionApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl ExtractionApi for HttpExtractionApi {
    async fn extract(&self, endpoint: Endpoint, request: &ExtractionRequest) -> Result<String, ApiError> {
        let url = self.config.endpoint_url(endpoint);
        #[cfg(feature = "hydrate")]
        {
            // `json` sets `Content-Type: application/json`.
            let resp = gloo_net::http::Request::post(&url)
                .json(request)
                .map_err(|e| ApiError::Payload(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = if resp.ok() {
                resp.text().await.map_err(|e| ApiError::Payload(e.to_string()))?
            } else {
                String::new()
            };
            classify_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, request);
            Err(ApiError::Unavailable)
        }
    }
}

/// Turn a received status and body into the display text or an error.
///
/// # Errors
///
/// [`ApiError::Status`] for non-2xx codes, [`ApiError::Payload`] when a 2xx
/// body does not carry a string `raspuns_final`.
pub fn classify_response(status: u16, body: &str) -> Result<String, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }
    parse_response_body(body)
}
