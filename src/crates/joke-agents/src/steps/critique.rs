use super::{complete, or_placeholder, JokeStep};
use crate::prompts;
use crate::score::extract_humor_score;
use crate::state::{JokeState, JokeUpdate};
use async_trait::async_trait;
use graph_core::llm::{ChatConfig, ChatModel};
use graph_core::Result;
use std::sync::Arc;

/// What the critic is asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CritiqueMode {
    /// A 0-10 rating plus reasoning; sets `humor_score`
    Scored,
    /// One sentence of feedback, no score
    Feedback,
}

/// Reviews the current joke.
///
/// Without a joke the step answers with a placeholder and leaves
/// `humor_score` unset.
pub struct CritiqueStep {
    name: String,
    model: Arc<dyn ChatModel>,
    mode: CritiqueMode,
    config: ChatConfig,
}

impl CritiqueStep {
    pub fn new(name: impl Into<String>, model: Arc<dyn ChatModel>, mode: CritiqueMode) -> Self {
        Self {
            name: name.into(),
            model,
            mode,
            config: ChatConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ChatConfig) -> Self {
        self.config = config;
        self
    }
}

#[async_trait]
impl JokeStep for CritiqueStep {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, state: JokeState) -> Result<JokeUpdate> {
        let Some(joke) = state.joke_text() else {
            return Ok(JokeUpdate::critique(prompts::NO_JOKE_TO_CRITIQUE));
        };

        let prompt = match self.mode {
            CritiqueMode::Scored => prompts::scored_critique(joke),
            CritiqueMode::Feedback => prompts::feedback_critique(joke),
        };
        let text = complete(self.model.as_ref(), prompt, &self.config).await?;
        let critique = or_placeholder(text, prompts::NO_CRITIQUE);

        match self.mode {
            CritiqueMode::Scored => {
                let score = extract_humor_score(&critique);
                tracing::debug!(humor_score = score, "Joke scored");
                Ok(JokeUpdate::scored_critique(critique, score))
            }
            CritiqueMode::Feedback => Ok(JokeUpdate::critique(critique)),
        }
    }
}
