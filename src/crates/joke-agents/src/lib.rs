//! # joke-agents
//!
//! Joke generation, critique, rewrite and memory steps, assembled into
//! [`graph_core`] pipelines.
//!
//! - [`JokePipeline`] - builds one of the [`PipelineVariant`] chains and runs it per topic
//! - [`JokeState`] / [`JokeUpdate`] - the state record and its partial updates
//! - [`steps`] - the step types, usable on their own in custom graphs
//! - [`score`] - humor score extraction from free-text critiques
//! - [`prompts`] - prompt templates and fixed placeholder texts
//! - [`testing`] - a scripted `ChatModel` for deterministic tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use graph_core::MemoryStore;
//! use joke_agents::{JokePipeline, PipelineVariant};
//! use llm::{remote::GroqClient, RemoteLlmConfig};
//! use std::sync::Arc;
//!
//! let model = Arc::new(GroqClient::new(RemoteLlmConfig::groq_from_env()?)?);
//! let memory = MemoryStore::new();
//! let pipeline = JokePipeline::build(PipelineVariant::Memory, model, memory)?;
//!
//! let state = pipeline.run("cats").await?;
//! println!("{:?} scored {:?}", state.joke, state.humor_score);
//! ```
//!
//! A model failure in any step aborts the run with a
//! [`GraphError::NodeExecution`](graph_core::GraphError::NodeExecution)
//! naming the step. Empty model replies never fail; they are replaced with
//! the placeholders in [`prompts`].

pub mod pipeline;
pub mod prompts;
pub mod score;
pub mod state;
pub mod steps;
pub mod testing;

pub use pipeline::{JokePipeline, PipelineVariant, UnknownVariant};
pub use score::{extract_humor_score, DEFAULT_HUMOR_SCORE};
pub use state::{JokeState, JokeUpdate};
pub use steps::{JokeStep, REWRITE_THRESHOLD};
