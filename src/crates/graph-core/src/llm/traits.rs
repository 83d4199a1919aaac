//! Core trait for LLM integration.
//!
//! Graph nodes depend on `Arc<dyn ChatModel>` rather than on any provider, so
//! the same node code runs against a hosted API in production and a scripted
//! model in tests.

use crate::error::Result;
use crate::llm::config::ChatRequest;
use crate::llm::response::ChatResponse;
use async_trait::async_trait;

/// Core trait for chat-based language models.
///
/// # Errors
///
/// Implementations report every failure (network, authentication, rate
/// limiting, unknown model, malformed response) as
/// [`GraphError::Model`](crate::error::GraphError::Model). Callers treat these as
/// fatal for the current graph run; nothing here retries.
///
/// # Threading and Safety
///
/// Implementations must be `Send + Sync`. Use `Arc<dyn ChatModel>` to share
/// one client across nodes.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Generate a complete chat response from messages.
    ///
    /// ```rust,ignore
    /// let request = ChatRequest::new(vec![Message::human("What is 2 + 2?")]);
    /// let response = model.chat(request).await?;
    /// println!("Answer: {}", response.text());
    /// ```
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse>;

    /// Identifier of the model this client talks to.
    fn model_name(&self) -> &str;

    /// Check if the model/provider is reachable.
    ///
    /// Default implementation returns `Ok(true)`, assuming availability.
    async fn is_available(&self) -> Result<bool> {
        Ok(true)
    }
}
