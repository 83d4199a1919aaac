//! Groq client implementation.
//!
//! Groq serves open-weight models (Llama, Mixtral, Gemma) behind an
//! OpenAI-compatible API, so the wire types here follow the
//! `/chat/completions` schema.
//!
//! # Example
//!
//! ```rust,ignore
//! use llm::remote::GroqClient;
//! use llm::config::RemoteLlmConfig;
//! use graph_core::llm::{ChatModel, ChatRequest};
//!
//! let config = RemoteLlmConfig::groq_from_env()?;
//! let client = GroqClient::new(config)?;
//!
//! let response = client.chat(ChatRequest::from_prompt("Hello!")).await?;
//! println!("{}", response.text());
//! ```

use crate::config::RemoteLlmConfig;
use crate::error::{LlmError, Result};
use async_trait::async_trait;
use graph_core::error::Result as GraphResult;
use graph_core::llm::{ChatModel, ChatRequest, ChatResponse, UsageMetadata};
use graph_core::{Message, MessageRole};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Groq API client.
#[derive(Debug, Clone)]
pub struct GroqClient {
    config: RemoteLlmConfig,
    client: Client,
}

impl GroqClient {
    /// Create a new Groq client with the given configuration.
    pub fn new(config: RemoteLlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &RemoteLlmConfig {
        &self.config
    }

    fn build_request(&self, request: &ChatRequest) -> GroqRequest {
        GroqRequest {
            model: self.config.model.clone(),
            messages: request.messages.iter().map(convert_message).collect(),
            temperature: request.config.temperature,
            max_tokens: request.config.max_tokens,
            top_p: request.config.top_p,
            stop: if request.config.stop_sequences.is_empty() {
                None
            } else {
                Some(request.config.stop_sequences.clone())
            },
            stream: false,
        }
    }
}

/// Convert a graph message to Groq message format.
fn convert_message(msg: &Message) -> GroqMessage {
    GroqMessage {
        role: match msg.role {
            MessageRole::System => "system".to_string(),
            MessageRole::Human => "user".to_string(),
            MessageRole::Assistant => "assistant".to_string(),
        },
        content: msg.text().to_string(),
    }
}

/// Convert a Groq response to ChatResponse.
fn convert_response(groq_resp: GroqResponse) -> Result<ChatResponse> {
    let choice = groq_resp
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("response contained no choices".to_string()))?;

    let usage = groq_resp
        .usage
        .as_ref()
        .map(|u| UsageMetadata::new(u.prompt_tokens, u.completion_tokens));

    let mut metadata = HashMap::new();
    metadata.insert(
        "model".to_string(),
        serde_json::Value::String(groq_resp.model),
    );
    metadata.insert(
        "finish_reason".to_string(),
        serde_json::Value::String(choice.finish_reason.unwrap_or_default()),
    );

    Ok(ChatResponse {
        message: Message::assistant(choice.message.content.unwrap_or_default()),
        usage,
        metadata,
    })
}

/// Map a non-success status and its body to a provider error.
fn status_error(status: StatusCode, body: String) -> LlmError {
    match status {
        StatusCode::UNAUTHORIZED => LlmError::AuthenticationError(body),
        StatusCode::NOT_FOUND => LlmError::ModelNotFound(body),
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded(body),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            LlmError::Timeout(format!("Groq API error {}: {}", status, body))
        }
        _ => LlmError::ProviderError(format!("Groq API error {}: {}", status, body)),
    }
}

#[async_trait]
impl ChatModel for GroqClient {
    async fn chat(&self, request: ChatRequest) -> GraphResult<ChatResponse> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let req_body = self.build_request(&request);

        tracing::debug!(model = %self.config.model, messages = req_body.messages.len(), "Sending Groq chat request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&req_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout(e.to_string())
                } else {
                    LlmError::HttpError(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "Groq API returned an error");
            return Err(status_error(status, error_text).into());
        }

        let groq_resp: GroqResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let chat_response = convert_response(groq_resp)?;
        if let Some(usage) = &chat_response.usage {
            tracing::debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "Groq chat request completed"
            );
        }
        Ok(chat_response)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }

    async fn is_available(&self) -> GraphResult<bool> {
        let url = format!("{}/models", self.config.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(LlmError::HttpError)?;

        Ok(response.status().is_success())
    }
}

// Groq API types (OpenAI-compatible)
#[derive(Debug, Serialize)]
struct GroqRequest {
    model: String,
    messages: Vec<GroqMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<Vec<String>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct GroqMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct GroqResponse {
    model: String,
    choices: Vec<GroqChoice>,
    usage: Option<GroqUsage>,
}

#[derive(Debug, Deserialize)]
struct GroqChoice {
    message: GroqResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GroqResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GroqUsage {
    prompt_tokens: usize,
    completion_tokens: usize,
}
