//! # joke-bot
//!
//! The `jokebot` command-line application: configuration, logging, the
//! interactive loop and output formatting around a
//! [`JokePipeline`](joke_agents::JokePipeline).

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod repl;

pub use cli::{Cli, Commands};
pub use config::{ConfigLoader, JokeBotConfig};
