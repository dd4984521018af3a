//! Langflow run-endpoint client.
//!
//! One POST per submission. Any 2xx response whose body is JSON counts as
//! success; everything else is a [`FlowError`].

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use super::types::{FlowChat, FlowError, RunRequest};
use crate::config::FlowConfig;

pub struct LangflowClient {
    http: reqwest::Client,
    url: String,
    api_token: String,
}

impl LangflowClient {
    /// Build a client for the configured run endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &FlowConfig) -> Result<Self, FlowError> {
        let mut builder = reqwest::Client::builder().connect_timeout(Duration::from_secs(config.timeouts.connect_secs));
        if let Some(secs) = config.timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| FlowError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url: config.run_url(), api_token: config.api_token.clone() })
    }

    /// Endpoint URL this client posts to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn send_json(&self, body: &RunRequest<'_>) -> Result<String, FlowError> {
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_token)
            .json(body)
            .send()
            .await
            .map_err(|e| FlowError::ApiRequest(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| FlowError::ApiRequest(e.to_string()))?;
        if !status.is_success() {
            return Err(FlowError::ApiResponse { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl FlowChat for LangflowClient {
    async fn run(&self, input_value: &str) -> Result<Value, FlowError> {
        debug!(url = %self.url, input_len = input_value.len(), "flow: run request");
        let text = self.send_json(&RunRequest::chat(input_value)).await?;
        parse_run_response(&text)
    }
}

/// Decode a run response body. Any JSON document is accepted.
pub(crate) fn parse_run_response(text: &str) -> Result<Value, FlowError> {
    serde_json::from_str(text).map_err(|e| FlowError::ApiParse(e.to_string()))
}

#[cfg(test)]
#[path = "langflow_test.rs"]
mod tests;
