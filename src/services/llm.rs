use crate::core::prompt::ChatMessage;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the text-generation service
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: no API key configured")]
    MissingApiKey,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Sampling parameters sent with every completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOptions {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.5,
            max_tokens: 1000,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat completions endpoint
pub struct LlmClient {
    base_url: String,
    api_key: String,
    options: CompletionOptions,
    client: Client,
}

impl LlmClient {
    /// Create a new client
    ///
    /// `timeout` bounds each request at the transport level.
    pub fn new(
        base_url: String,
        api_key: String,
        options: CompletionOptions,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            options,
            client,
        })
    }

    pub fn options(&self) -> &CompletionOptions {
        &self.options
    }

    /// Send a chat completion request and return the first choice's text
    ///
    /// Returns an empty string when the service answered without content.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        if self.api_key.is_empty() {
            return Err(LlmError::MissingApiKey);
        }

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let request = ChatCompletionRequest {
            model: &self.options.model,
            messages,
            temperature: self.options.temperature,
            max_tokens: self.options.max_tokens,
        };

        tracing::debug!("Requesting completion from {} with model {}", url, self.options.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Completion request failed: {} - {}", status, body);
            return Err(LlmError::ApiError(format!(
                "Completion request failed: {}",
                status
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse completion: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        Ok(content)
    }
}
