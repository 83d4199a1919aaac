//! Chat response types.

use crate::messages::Message;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Token accounting reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UsageMetadata {
    pub input_tokens: usize,
    pub output_tokens: usize,
    pub total_tokens: usize,
}

impl UsageMetadata {
    pub fn new(input_tokens: usize, output_tokens: usize) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
        }
    }
}

/// A complete, non-streamed model response
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// The assistant message
    pub message: Message,

    /// Token usage, when the provider reports it
    pub usage: Option<UsageMetadata>,

    /// Provider-specific details (model, finish reason, ...)
    pub metadata: HashMap<String, serde_json::Value>,
}

impl ChatResponse {
    /// Response wrapping a plain assistant text
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            message: Message::assistant(text),
            usage: None,
            metadata: HashMap::new(),
        }
    }

    /// Assistant text, untrimmed
    pub fn text(&self) -> &str {
        self.message.text()
    }
}
