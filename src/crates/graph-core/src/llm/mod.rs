//! LLM integration traits and types.
//!
//! This module provides the [`ChatModel`] **trait** that graph nodes call
//! and the request/response types that flow through it. Concrete providers
//! live in the `llm` crate; tests use scripted implementations.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use graph_core::llm::{ChatModel, ChatRequest};
//! use graph_core::Message;
//!
//! let model: Arc<dyn ChatModel> = Arc::new(GroqClient::new(config));
//!
//! let request = ChatRequest::new(vec![Message::human("Tell me a joke")])
//!     .with_temperature(0.7);
//!
//! let response = model.chat(request).await?;
//! println!("{}", response.text());
//! ```

pub mod config;
pub mod response;
pub mod traits;

pub use config::{ChatConfig, ChatRequest};
pub use response::{ChatResponse, UsageMetadata};
pub use traits::ChatModel;
