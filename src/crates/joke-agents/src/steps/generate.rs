use super::{complete, JokeStep};
use crate::prompts;
use crate::state::{JokeState, JokeUpdate};
use async_trait::async_trait;
use graph_core::llm::{ChatConfig, ChatModel};
use graph_core::{MemoryStore, RecordOutcome, Result};
use std::sync::Arc;

/// Asks the model for a joke about the state's topic.
///
/// With a [`MemoryStore`] attached, a fresh joke is recorded and a joke the
/// store already holds comes back wrapped in the "reused" marker instead.
/// The empty-reply placeholder is never recorded.
pub struct GenerateStep {
    name: String,
    model: Arc<dyn ChatModel>,
    prompt: fn(&str) -> String,
    memory: Option<MemoryStore>,
    config: ChatConfig,
}

impl GenerateStep {
    pub fn new(name: impl Into<String>, model: Arc<dyn ChatModel>, prompt: fn(&str) -> String) -> Self {
        Self {
            name: name.into(),
            model,
            prompt,
            memory: None,
            config: ChatConfig::default(),
        }
    }

    pub fn with_memory(mut self, memory: MemoryStore) -> Self {
        self.memory = Some(memory);
        self
    }

    pub fn with_config(mut self, config: ChatConfig) -> Self {
        self.config = config;
        self
    }
}

#[async_trait]
impl JokeStep for GenerateStep {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, state: JokeState) -> Result<JokeUpdate> {
        let prompt = (self.prompt)(&state.topic);
        let text = complete(self.model.as_ref(), prompt, &self.config).await?;

        if text.is_empty() {
            tracing::debug!(topic = %state.topic, "Model returned an empty joke");
            return Ok(JokeUpdate::joke(prompts::NO_JOKE));
        }

        let joke = match &self.memory {
            Some(memory) => match memory.record(text.clone()) {
                RecordOutcome::Appended => text,
                RecordOutcome::Duplicate => {
                    tracing::info!(topic = %state.topic, "Joke already in memory");
                    prompts::reused_joke(&text)
                }
            },
            None => text,
        };

        Ok(JokeUpdate::joke(joke))
    }
}
