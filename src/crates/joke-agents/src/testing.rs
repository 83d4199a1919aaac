//! Deterministic chat model for tests
//!
//! [`ScriptedChatModel`] replays queued replies in order and records every
//! prompt it receives, so pipeline tests can assert both what was sent and
//! how many calls were made without touching the network.
//!
//! ```rust
//! use joke_agents::testing::ScriptedChatModel;
//!
//! let model = ScriptedChatModel::new()
//!     .with_reply("Cats are liquid.")
//!     .with_failure("rate limited");
//! assert_eq!(model.remaining(), 2);
//! ```

use async_trait::async_trait;
use graph_core::llm::{ChatModel, ChatRequest, ChatResponse};
use graph_core::{GraphError, Result};
use parking_lot::Mutex;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Scripted {
    Reply(String),
    Failure(String),
}

/// Chat model that answers from a script
#[derive(Debug, Default)]
pub struct ScriptedChatModel {
    script: Mutex<VecDeque<Scripted>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedChatModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Model that answers with `replies`, in order
    pub fn with_replies<I, T>(replies: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        replies
            .into_iter()
            .fold(Self::new(), |model, reply| model.with_reply(reply))
    }

    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.script.lock().push_back(Scripted::Reply(reply.into()));
        self
    }

    /// Queue a call that fails with [`GraphError::Model`]
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.script.lock().push_back(Scripted::Failure(message.into()));
        self
    }

    /// Number of `chat` calls made so far
    pub fn calls(&self) -> usize {
        self.prompts.lock().len()
    }

    /// Text of every prompt received, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    /// Replies not consumed yet
    pub fn remaining(&self) -> usize {
        self.script.lock().len()
    }
}

#[async_trait]
impl ChatModel for ScriptedChatModel {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let prompt = request
            .messages
            .iter()
            .map(|message| message.text())
            .collect::<Vec<_>>()
            .join("\n");
        self.prompts.lock().push(prompt);

        match self.script.lock().pop_front() {
            Some(Scripted::Reply(text)) => Ok(ChatResponse::from_text(text)),
            Some(Scripted::Failure(message)) => Err(GraphError::Model(message)),
            None => Err(GraphError::Model("scripted model has no replies left".to_string())),
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
