// OpenAI chat completions client
// Author: kelexine (https://github.com/kelexine)

use super::{ApiKey, ChatCompletionRequest, ChatCompletionResponse};
use crate::config::OpenAiConfig;
use crate::error::{NodeError, Result};
use crate::utils::logging::sanitize;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, error, warn};

/// Client for the OpenAI chat completions endpoint.
///
/// Sends exactly one request per call. There is no retry and no timeout
/// unless `timeout_seconds` is configured.
#[derive(Clone)]
pub struct OpenAiClient {
    http_client: Client,
    endpoint: String,
}

impl OpenAiClient {
    pub fn new(config: &OpenAiConfig) -> Result<Self> {
        let mut builder = Client::builder().use_rustls_tls();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http_client = builder
            .build()
            .map_err(|e| NodeError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint: format!("{}/chat/completions", config.api_base_url.trim_end_matches('/')),
        })
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST a chat completion and return the first choice's text.
    ///
    /// Errors are returned as-is for the caller; nothing is retried.
    pub async fn chat_completion(
        &self,
        api_key: &ApiKey,
        request: &ChatCompletionRequest,
    ) -> Result<String> {
        debug!("Calling chat completions for model: {}", request.model);

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", api_key.expose()))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();

        if status != StatusCode::OK {
            // The status is the error; a body that fails to arrive is just empty
            let response_text = response.text().await.unwrap_or_else(|e| {
                warn!("Failed to read error body for HTTP {}: {}", status, e);
                String::new()
            });
            error!(
                "OpenAI API error: HTTP {} - Response body: {}",
                status,
                sanitize(&response_text)
            );
            return Err(NodeError::Api {
                status: status.as_u16(),
                body: response_text,
            });
        }

        let response_text = response.text().await?;

        debug!(
            "Raw OpenAI response (first 500 chars): {}",
            sanitize(&response_text.chars().take(500).collect::<String>())
        );

        let completion: ChatCompletionResponse = serde_json::from_str(&response_text)
            .map_err(|e| {
                error!("Failed to parse OpenAI response: {}", e);
                NodeError::ResponseParse(e.to_string())
            })?;

        completion.first_content().ok_or_else(|| {
            NodeError::ResponseParse("Response has no choices[0].message.content".to_string())
        })
    }
}
