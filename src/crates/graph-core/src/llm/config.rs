//! Chat request and sampling configuration.

use crate::messages::Message;

/// A chat request: messages plus sampling configuration
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub messages: Vec<Message>,

    pub config: ChatConfig,
}

impl ChatRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            config: ChatConfig::default(),
        }
    }

    /// Request consisting of a single human message
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self::new(vec![Message::human(prompt)])
    }

    pub fn with_config(mut self, config: ChatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.config.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.config.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.config.top_p = Some(top_p);
        self
    }

    pub fn with_stop_sequences(mut self, sequences: Vec<String>) -> Self {
        self.config.stop_sequences = sequences;
        self
    }
}

/// Sampling options; `None` leaves the provider default in place
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatConfig {
    pub temperature: Option<f32>,

    pub max_tokens: Option<usize>,

    pub top_p: Option<f32>,

    pub stop_sequences: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::MessageRole;

    #[test]
    fn test_chat_request_builder() {
        let request = ChatRequest::new(vec![Message::human("test")])
            .with_temperature(0.7)
            .with_max_tokens(100)
            .with_top_p(0.9);

        assert_eq!(request.config.temperature, Some(0.7));
        assert_eq!(request.config.max_tokens, Some(100));
        assert_eq!(request.config.top_p, Some(0.9));
    }

    #[test]
    fn test_from_prompt_is_single_human_message() {
        let request = ChatRequest::from_prompt("Tell me a joke about cats");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, MessageRole::Human);
        assert_eq!(request.messages[0].text(), "Tell me a joke about cats");
    }

    #[test]
    fn test_default_config() {
        let config = ChatConfig::default();
        assert!(config.temperature.is_none());
        assert!(config.stop_sequences.is_empty());
    }
}
