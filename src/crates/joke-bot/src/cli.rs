//! Command-line definition

use crate::config::JokeBotConfig;
use clap::{ArgAction, Parser, Subcommand};
use joke_agents::PipelineVariant;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "jokebot")]
#[command(about = "Multi-agent joke bot: generate, critique, rewrite, remember", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Pipeline to run: simple, reviewed or memory
    #[arg(long, global = true)]
    pub variant: Option<PipelineVariant>,

    /// Model identifier
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Extra config file applied after the user and project files
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Ask for topics interactively (default)
    Chat,

    /// Run the pipeline once
    Run {
        /// Joke topic
        #[arg(short, long)]
        topic: String,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the pipeline as a Mermaid flowchart
    Graph {
        /// Plain-text diagram instead of Mermaid
        #[arg(long)]
        ascii: bool,
    },
}

impl Cli {
    pub fn selected_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Chat)
    }

    /// Apply flag values on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut JokeBotConfig) {
        if let Some(variant) = self.variant {
            config.pipeline.variant = variant;
        }
        if let Some(model) = &self.model {
            config.llm.model = model.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.llm.base_url = base_url.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_chat() {
        let cli = Cli::try_parse_from(["jokebot"]).unwrap();
        assert_eq!(cli.selected_command(), Commands::Chat);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_run_with_globals() {
        let cli = Cli::try_parse_from([
            "jokebot", "run", "--topic", "cats", "--json", "--variant", "reviewed", "-vv",
        ])
        .unwrap();

        assert_eq!(
            cli.selected_command(),
            Commands::Run {
                topic: "cats".to_string(),
                json: true
            }
        );
        assert_eq!(cli.variant, Some(PipelineVariant::Reviewed));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_graph_ascii_flag() {
        let cli = Cli::try_parse_from(["jokebot", "graph", "--ascii"]).unwrap();
        assert_eq!(cli.selected_command(), Commands::Graph { ascii: true });
    }

    #[test]
    fn test_rejects_unknown_variant() {
        assert!(Cli::try_parse_from(["jokebot", "--variant", "fancy"]).is_err());
    }

    #[test]
    fn test_run_requires_topic() {
        assert!(Cli::try_parse_from(["jokebot", "run"]).is_err());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "jokebot", "--model", "llama-3.3-70b-versatile", "--base-url", "http://localhost:8080/v1", "graph",
        ])
        .unwrap();
        let mut config = JokeBotConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.llm.model, "llama-3.3-70b-versatile");
        assert_eq!(config.llm.base_url, "http://localhost:8080/v1");
        assert_eq!(config.pipeline.variant, PipelineVariant::Memory);
    }
}
