//! Wire DTOs for the HCL extraction API.
//!
//! DESIGN
//! ======
//! Field names on the wire are the backend's Romanian keys; the Rust side
//! uses English names and maps them with `serde(rename)`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The two extraction endpoints exposed by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// General HCL information, answered as markdown.
    General,
    /// Timpark-specific HCL information, answered as markup.
    Timpark,
}

impl Endpoint {
    /// Request path relative to the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::General => "/extrage_informatii/",
            Self::Timpark => "/extrage_timpark_informatii/",
        }
    }
}

/// JSON body posted to either endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    /// Prompt text exactly as typed, empty allowed.
    #[serde(rename = "interogare_utilizator")]
    pub user_query: String,
    /// Answer language flag. The UI always asks for Romanian (`false`).
    pub english: bool,
}

impl ExtractionRequest {
    pub fn romanian(user_query: impl Into<String>) -> Self {
        Self { user_query: user_query.into(), english: false }
    }
}

/// Successful response body. Only `raspuns_final` is read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResponse {
    #[serde(rename = "raspuns_final")]
    pub final_answer: String,
}

/// Failure modes of one extraction call.
///
/// The UI collapses all of these into a single message; the variant only
/// reaches the console log.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("unusable response payload: {0}")]
    Payload(String),
    #[error("extraction API is only reachable from the browser")]
    Unavailable,
}

/// Parse a successful response body into the display text.
///
/// # Errors
///
/// Returns [`ApiError::Payload`] when the body is not JSON or lacks a string
/// `raspuns_final` field.
pub fn parse_response_body(body: &str) -> Result<String, ApiError> {
    serde_json::from_str::<ExtractionResponse>(body)
        .map(|resp| resp.final_answer)
        .map_err(|e| ApiError::Payload(e.to_string()))
}
