//! Flow types — run request wire shape, errors, and the client seam.

use serde::Serialize;
use serde_json::Value;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by flow client operations.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The flow endpoint returned a non-success HTTP status.
    #[error("API request failed: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Body of a flow run request. Input and output are always chat-typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunRequest<'a> {
    pub input_value: &'a str,
    pub output_type: &'static str,
    pub input_type: &'static str,
}

impl<'a> RunRequest<'a> {
    #[must_use]
    pub fn chat(input_value: &'a str) -> Self {
        Self { input_value, output_type: "chat", input_type: "chat" }
    }
}

// =============================================================================
// FLOW CHAT TRAIT
// =============================================================================

/// Async seam over the remote flow. Enables mocking in tests.
#[async_trait::async_trait]
pub trait FlowChat: Send + Sync {
    /// Submit one user utterance and return the decoded JSON response.
    ///
    /// # Errors
    ///
    /// Returns a [`FlowError`] on transport failure, a non-success status, or
    /// a response body that is not JSON.
    async fn run(&self, input_value: &str) -> Result<Value, FlowError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
