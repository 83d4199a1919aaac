//! Joke pipeline state
//!
//! [`JokeState`] is the record threaded through every step. Steps never
//! mutate it directly: each returns a [`JokeUpdate`] and the engine merges
//! it with [`GraphState::apply`].
//!
//! ```text
//! topic ─► tell_joke ─► critic ─────────────► rewriter ─► memory
//!            │            │                     │           │
//!            joke         critique, humor_score rewritten   memory
//! ```

use graph_core::{GraphError, GraphState, Result};
use serde::{Deserialize, Serialize};

/// State accumulated across one pipeline run.
///
/// Every field but `topic` is optional so that "not written yet" differs
/// from "written empty".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JokeState {
    pub topic: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joke: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critique: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humor_score: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewritten: Option<String>,

    /// Snapshot of the memory store taken by the last step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<Vec<String>>,
}

impl JokeState {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Default::default()
        }
    }

    /// The joke text, treating an empty string as absent
    pub fn joke_text(&self) -> Option<&str> {
        self.joke.as_deref().filter(|joke| !joke.is_empty())
    }
}

/// Partial state returned by a step. `Some` overwrites, `None` keeps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JokeUpdate {
    pub joke: Option<String>,
    pub critique: Option<String>,
    pub humor_score: Option<u8>,
    pub rewritten: Option<String>,
    pub memory: Option<Vec<String>>,
}

impl JokeUpdate {
    pub fn joke(text: impl Into<String>) -> Self {
        Self {
            joke: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn critique(text: impl Into<String>) -> Self {
        Self {
            critique: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn scored_critique(text: impl Into<String>, humor_score: u8) -> Self {
        Self {
            critique: Some(text.into()),
            humor_score: Some(humor_score),
            ..Default::default()
        }
    }

    pub fn rewritten(text: impl Into<String>) -> Self {
        Self {
            rewritten: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn memory(snapshot: Vec<String>) -> Self {
        Self {
            memory: Some(snapshot),
            ..Default::default()
        }
    }
}

impl GraphState for JokeState {
    type Update = JokeUpdate;

    fn apply(&mut self, update: JokeUpdate) {
        if let Some(joke) = update.joke {
            self.joke = Some(joke);
        }
        if let Some(critique) = update.critique {
            self.critique = Some(critique);
        }
        if let Some(score) = update.humor_score {
            self.humor_score = Some(score);
        }
        if let Some(rewritten) = update.rewritten {
            self.rewritten = Some(rewritten);
        }
        if let Some(memory) = update.memory {
            self.memory = Some(memory);
        }
    }

    fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() {
            return Err(GraphError::Validation(
                "topic must be a non-empty string".to_string(),
            ));
        }
        Ok(())
    }
}
