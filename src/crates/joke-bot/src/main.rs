//! jokebot - multi-agent joke bot
//!
//! Main entry point for the jokebot command-line tool.

use anyhow::{Context, Result};
use clap::Parser;
use graph_core::{visualize, MemoryStore, VisualizationOptions};
use joke_agents::{JokePipeline, PipelineVariant};
use joke_bot::output::render_state;
use joke_bot::{logging, repl, Cli, Commands, ConfigLoader, JokeBotConfig};
use llm::remote::GroqClient;
use std::sync::Arc;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_handle = logging::init_logging(cli.verbose);

    let mut config = ConfigLoader::new().load(cli.config.as_deref()).await?;
    cli.apply_overrides(&mut config);
    log_handle.apply_level(&config.logging.level);

    match cli.selected_command() {
        Commands::Graph { ascii } => {
            print_graph(config.pipeline.variant, ascii);
        }
        Commands::Run { topic, json } => {
            let pipeline = build_pipeline(&config)?;
            let state = pipeline.run(topic).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                print!("{}", render_state(&state));
            }
        }
        Commands::Chat => {
            let pipeline = build_pipeline(&config)?;
            let stdin = BufReader::new(tokio::io::stdin());
            repl::run_interactive(&pipeline, stdin, &mut std::io::stdout()).await?;
        }
    }

    Ok(())
}

fn build_pipeline(config: &JokeBotConfig) -> Result<JokePipeline> {
    let client =
        GroqClient::new(config.remote_config()?).context("Failed to create model client")?;
    tracing::info!(
        model = %config.llm.model,
        variant = %config.pipeline.variant,
        "Using Groq"
    );

    let pipeline = JokePipeline::build_with_config(
        config.pipeline.variant,
        Arc::new(client),
        MemoryStore::new(),
        config.chat_config(),
    )?;
    Ok(pipeline)
}

// No model client needed just to draw the chain
fn print_graph(variant: PipelineVariant, ascii: bool) {
    let steps: Vec<String> = variant.step_names().iter().map(|s| s.to_string()).collect();
    let options = if ascii {
        VisualizationOptions::ascii()
    } else {
        VisualizationOptions::mermaid()
    }
    .with_title(format!("jokebot: {}", variant));
    println!("{}", visualize(&steps, &options));
}
