//! Remote LLM provider implementations.
//!
//! These providers talk to cloud-hosted APIs and need an API key.
//!
//! # Providers
//!
//! - **Groq** - Llama and other open-weight models over an OpenAI-compatible API

pub mod groq;

pub use groq::GroqClient;
