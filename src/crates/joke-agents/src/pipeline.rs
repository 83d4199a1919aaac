//! Joke pipelines
//!
//! Three fixed chains built from the same step types:
//!
//! | variant    | chain                                           |
//! |------------|-------------------------------------------------|
//! | `simple`   | `tell_joke`                                     |
//! | `reviewed` | `joke_gen → critic → rewriter`                  |
//! | `memory`   | `tell_joke → critic → rewriter → memory`        |
//!
//! Every chain ends at `END`. The `memory` chain scores the joke and only
//! rewrites it below [`REWRITE_THRESHOLD`]; `reviewed` always rewrites.
//!
//! ```rust
//! use joke_agents::testing::ScriptedChatModel;
//! use joke_agents::{JokePipeline, PipelineVariant};
//! use graph_core::MemoryStore;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> graph_core::Result<()> {
//! let model = Arc::new(ScriptedChatModel::with_replies(["Cats are liquid."]));
//! let pipeline = JokePipeline::build(PipelineVariant::Simple, model, MemoryStore::new())?;
//!
//! let state = pipeline.run("cats").await?;
//! assert_eq!(state.joke.as_deref(), Some("Cats are liquid."));
//! # Ok(())
//! # }
//! ```

use crate::prompts;
use crate::state::JokeState;
use crate::steps::{
    CritiqueMode, CritiqueStep, GenerateStep, JokeStep, MemoryStep, RewriteStep, REWRITE_THRESHOLD,
};
use graph_core::llm::{ChatConfig, ChatModel};
use graph_core::{CompiledGraph, MemoryStore, NodeId, Result, StateGraph, END};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

const TELL_JOKE: &str = "tell_joke";
const JOKE_GEN: &str = "joke_gen";
const CRITIC: &str = "critic";
const REWRITER: &str = "rewriter";
const MEMORY: &str = "memory";

/// Which chain to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineVariant {
    /// One joke, nothing else
    Simple,
    /// Joke, one-sentence review, clean rewrite
    Reviewed,
    /// Joke with memory dedup, scored critique, conditional rewrite, history
    #[default]
    Memory,
}

impl PipelineVariant {
    pub const ALL: [PipelineVariant; 3] = [Self::Simple, Self::Reviewed, Self::Memory];

    /// Node names of this variant's chain, in order
    pub fn step_names(&self) -> &'static [&'static str] {
        match self {
            Self::Simple => &[TELL_JOKE],
            Self::Reviewed => &[JOKE_GEN, CRITIC, REWRITER],
            Self::Memory => &[TELL_JOKE, CRITIC, REWRITER, MEMORY],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Reviewed => "reviewed",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for PipelineVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown pipeline variant '{0}' (expected simple, reviewed or memory)")]
pub struct UnknownVariant(pub String);

impl FromStr for PipelineVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "reviewed" => Ok(Self::Reviewed),
            "memory" => Ok(Self::Memory),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// A compiled joke chain plus the memory store it writes to
#[derive(Debug, Clone)]
pub struct JokePipeline {
    variant: PipelineVariant,
    graph: CompiledGraph<JokeState>,
    memory: MemoryStore,
}

impl JokePipeline {
    /// Build `variant` with default sampling options
    pub fn build(
        variant: PipelineVariant,
        model: Arc<dyn ChatModel>,
        memory: MemoryStore,
    ) -> Result<Self> {
        Self::build_with_config(variant, model, memory, ChatConfig::default())
    }

    /// Build `variant`, sending `config` with every model call
    pub fn build_with_config(
        variant: PipelineVariant,
        model: Arc<dyn ChatModel>,
        memory: MemoryStore,
        config: ChatConfig,
    ) -> Result<Self> {
        let steps = Self::steps_for(variant, model, &memory, config);

        let mut graph: StateGraph<JokeState> = StateGraph::new();
        let mut previous: Option<String> = None;
        for step in steps {
            let name = step.name().to_string();
            graph.add_node(name.clone(), move |state: JokeState| {
                let step = step.clone();
                async move { step.run(state).await }
            });
            match previous {
                Some(prev) => graph.add_edge(prev, name.clone()),
                None => graph.set_entry(name.clone()),
            };
            previous = Some(name);
        }
        if let Some(last) = previous {
            graph.add_edge(last, END);
        }

        let graph = graph.compile()?;
        tracing::debug!(%variant, steps = ?graph.steps(), "Pipeline compiled");

        Ok(Self {
            variant,
            graph,
            memory,
        })
    }

    fn steps_for(
        variant: PipelineVariant,
        model: Arc<dyn ChatModel>,
        memory: &MemoryStore,
        config: ChatConfig,
    ) -> Vec<Arc<dyn JokeStep>> {
        match variant {
            PipelineVariant::Simple => vec![step(
                GenerateStep::new(TELL_JOKE, model, prompts::simple_joke).with_config(config),
            )],
            PipelineVariant::Reviewed => vec![
                step(
                    GenerateStep::new(JOKE_GEN, model.clone(), prompts::short_joke)
                        .with_config(config.clone()),
                ),
                step(
                    CritiqueStep::new(CRITIC, model.clone(), CritiqueMode::Feedback)
                        .with_config(config.clone()),
                ),
                step(RewriteStep::new(REWRITER, model, prompts::clean_rewrite).with_config(config)),
            ],
            PipelineVariant::Memory => vec![
                step(
                    GenerateStep::new(TELL_JOKE, model.clone(), prompts::creative_joke)
                        .with_memory(memory.clone())
                        .with_config(config.clone()),
                ),
                step(
                    CritiqueStep::new(CRITIC, model.clone(), CritiqueMode::Scored)
                        .with_config(config.clone()),
                ),
                step(
                    RewriteStep::new(REWRITER, model, prompts::funnier_rewrite)
                        .with_threshold(REWRITE_THRESHOLD)
                        .with_config(config),
                ),
                step(MemoryStep::new(MEMORY, memory.clone())),
            ],
        }
    }

    /// Run the chain for one topic
    pub async fn run(&self, topic: impl Into<String>) -> Result<JokeState> {
        self.graph.invoke(JokeState::new(topic)).await
    }

    pub fn variant(&self) -> PipelineVariant {
        self.variant
    }

    /// Step names in execution order
    pub fn steps(&self) -> &[NodeId] {
        self.graph.steps()
    }

    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }

    pub fn to_mermaid(&self) -> String {
        self.graph.to_mermaid()
    }
}

fn step(step: impl JokeStep + 'static) -> Arc<dyn JokeStep> {
    Arc::new(step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedChatModel;

    fn build(variant: PipelineVariant) -> JokePipeline {
        JokePipeline::build(variant, Arc::new(ScriptedChatModel::new()), MemoryStore::new()).unwrap()
    }

    #[test]
    fn test_step_order_per_variant() {
        assert_eq!(build(PipelineVariant::Simple).steps(), ["tell_joke"]);
        assert_eq!(
            build(PipelineVariant::Reviewed).steps(),
            ["joke_gen", "critic", "rewriter"]
        );
        assert_eq!(
            build(PipelineVariant::Memory).steps(),
            ["tell_joke", "critic", "rewriter", "memory"]
        );
    }

    #[test]
    fn test_step_names_match_compiled_chain() {
        for variant in PipelineVariant::ALL {
            assert_eq!(build(variant).steps(), variant.step_names());
        }
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!("memory".parse::<PipelineVariant>(), Ok(PipelineVariant::Memory));
        assert_eq!(" Reviewed ".parse::<PipelineVariant>(), Ok(PipelineVariant::Reviewed));
        assert_eq!(
            "fancy".parse::<PipelineVariant>(),
            Err(UnknownVariant("fancy".to_string()))
        );
        for variant in PipelineVariant::ALL {
            assert_eq!(variant.to_string().parse::<PipelineVariant>(), Ok(variant));
        }
        assert_eq!(PipelineVariant::default(), PipelineVariant::Memory);
    }

    #[test]
    fn test_mermaid_lists_chain() {
        let mermaid = build(PipelineVariant::Memory).to_mermaid();
        assert!(mermaid.contains("tell_joke --> critic"));
        assert!(mermaid.contains("rewriter --> memory"));
        assert!(mermaid.contains("memory --> END"));
    }
}
