//! Chat model providers for graph-core pipelines.
//!
//! This crate provides concrete implementations of the `ChatModel` trait from
//! `graph-core`.
//!
//! # Remote Providers
//!
//! - **Groq** - `llama-3.1-8b-instant` and friends via Groq's OpenAI-compatible API
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use llm::remote::GroqClient;
//! use llm::config::RemoteLlmConfig;
//! use graph_core::llm::{ChatModel, ChatRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RemoteLlmConfig::groq_from_env()?;
//!     let client = GroqClient::new(config)?;
//!
//!     let request = ChatRequest::from_prompt("Tell me a funny joke about Rust")
//!         .with_temperature(0.7);
//!
//!     let response = client.chat(request).await?;
//!     println!("Response: {}", response.text());
//!
//!     Ok(())
//! }
//! ```
//!
//! Provider failures are [`LlmError`] values; they convert into
//! `GraphError::Model` when they cross the `ChatModel` boundary.

pub mod config;
pub mod error;

#[cfg(feature = "remote")]
pub mod remote;

// Re-export commonly used types
pub use config::RemoteLlmConfig;
pub use error::{LlmError, Result};

// Re-export graph-core types for convenience
pub use graph_core::llm::{ChatConfig, ChatModel, ChatRequest, ChatResponse, UsageMetadata};
pub use graph_core::Message;
