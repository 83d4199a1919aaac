//! Pipeline steps
//!
//! Each step reads the current [`JokeState`], makes at most one model call
//! and returns a [`JokeUpdate`]. Steps are registered with the graph as
//! nodes; the graph name of a step comes from [`JokeStep::name`].

use crate::state::{JokeState, JokeUpdate};
use async_trait::async_trait;
use graph_core::llm::{ChatConfig, ChatModel, ChatRequest};
use graph_core::Result;

mod critique;
mod generate;
mod memory;
mod rewrite;

pub use critique::{CritiqueMode, CritiqueStep};
pub use generate::GenerateStep;
pub use memory::MemoryStep;
pub use rewrite::{RewriteStep, REWRITE_THRESHOLD};

/// A single unit of the joke pipeline
#[async_trait]
pub trait JokeStep: Send + Sync {
    /// Node name in the graph
    fn name(&self) -> &str;

    async fn run(&self, state: JokeState) -> Result<JokeUpdate>;
}

/// Send one prompt and return the trimmed reply.
async fn complete(model: &dyn ChatModel, prompt: String, config: &ChatConfig) -> Result<String> {
    tracing::trace!(model = model.model_name(), %prompt, "Sending prompt");

    let request = ChatRequest::from_prompt(prompt).with_config(config.clone());
    let response = model.chat(request).await?;
    let text = response.text().trim().to_string();

    tracing::trace!(model = model.model_name(), reply = %text, "Received reply");
    Ok(text)
}

fn or_placeholder(text: String, placeholder: &str) -> String {
    if text.is_empty() {
        placeholder.to_string()
    } else {
        text
    }
}
