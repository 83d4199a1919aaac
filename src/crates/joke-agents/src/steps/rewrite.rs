use super::{complete, or_placeholder, JokeStep};
use crate::prompts;
use crate::score::DEFAULT_HUMOR_SCORE;
use crate::state::{JokeState, JokeUpdate};
use async_trait::async_trait;
use graph_core::llm::{ChatConfig, ChatModel};
use graph_core::Result;
use std::sync::Arc;

/// Jokes scoring at least this much are kept as they are
pub const REWRITE_THRESHOLD: u8 = 7;

/// Rewrites the joke to be family-friendly.
///
/// With a threshold set, a joke whose `humor_score` reaches it is left alone
/// and no model call is made. A missing score counts as
/// [`DEFAULT_HUMOR_SCORE`].
pub struct RewriteStep {
    name: String,
    model: Arc<dyn ChatModel>,
    prompt: fn(&str) -> String,
    threshold: Option<u8>,
    config: ChatConfig,
}

impl RewriteStep {
    /// Always calls the model
    pub fn new(name: impl Into<String>, model: Arc<dyn ChatModel>, prompt: fn(&str) -> String) -> Self {
        Self {
            name: name.into(),
            model,
            prompt,
            threshold: None,
            config: ChatConfig::default(),
        }
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_config(mut self, config: ChatConfig) -> Self {
        self.config = config;
        self
    }
}

#[async_trait]
impl JokeStep for RewriteStep {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, state: JokeState) -> Result<JokeUpdate> {
        let Some(joke) = state.joke_text() else {
            return Ok(JokeUpdate::rewritten(prompts::NO_JOKE_TO_REWRITE));
        };

        if let Some(threshold) = self.threshold {
            let score = state.humor_score.unwrap_or(DEFAULT_HUMOR_SCORE);
            if score >= threshold {
                tracing::debug!(humor_score = score, threshold, "Skipping rewrite");
                return Ok(JokeUpdate::rewritten(prompts::ALREADY_GOOD));
            }
        }

        let text = complete(self.model.as_ref(), (self.prompt)(joke), &self.config).await?;
        Ok(JokeUpdate::rewritten(or_placeholder(text, prompts::NO_REWRITE)))
    }
}
