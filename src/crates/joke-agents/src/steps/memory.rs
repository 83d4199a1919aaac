use super::JokeStep;
use crate::state::{JokeState, JokeUpdate};
use async_trait::async_trait;
use graph_core::{MemoryStore, Result};

/// Copies the memory store into the state
pub struct MemoryStep {
    name: String,
    memory: MemoryStore,
}

impl MemoryStep {
    pub fn new(name: impl Into<String>, memory: MemoryStore) -> Self {
        Self {
            name: name.into(),
            memory,
        }
    }
}

#[async_trait]
impl JokeStep for MemoryStep {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, _state: JokeState) -> Result<JokeUpdate> {
        Ok(JokeUpdate::memory(self.memory.snapshot()))
    }
}
