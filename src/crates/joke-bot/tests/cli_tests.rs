//! Integration tests for jokebot
//!
//! These tests verify:
//! - Config file layering (user, project, explicit)
//! - The interactive loop against a scripted model
//! - Sentinel handling and error reporting

use graph_core::MemoryStore;
use joke_agents::testing::ScriptedChatModel;
use joke_agents::{JokePipeline, PipelineVariant};
use joke_bot::config::ConfigLoader;
use joke_bot::output::GOODBYE;
use joke_bot::repl::run_interactive;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::io::BufReader;

fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write config file");
    path
}

#[tokio::test]
async fn test_defaults_when_no_files() {
    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::with_paths(
        Some(temp_dir.path().join("missing-user.toml")),
        Some(temp_dir.path().join("missing-project.toml")),
    );

    let config = loader.load(None).await.unwrap();
    assert_eq!(config.llm.model, "llama-3.1-8b-instant");
    assert_eq!(config.pipeline.variant, PipelineVariant::Memory);
    assert_eq!(config.logging.level, "warn");
}

#[tokio::test]
async fn test_project_overrides_user() {
    let temp_dir = TempDir::new().unwrap();
    let user = write_config(
        temp_dir.path(),
        "user.toml",
        r#"
[llm]
model = "llama-3.3-70b-versatile"
timeout_secs = 30

[logging]
level = "info"
"#,
    );
    let project = write_config(
        temp_dir.path(),
        "project.toml",
        r#"
[llm]
model = "gemma2-9b-it"

[pipeline]
variant = "reviewed"
"#,
    );

    let config = ConfigLoader::with_paths(Some(user), Some(project))
        .load(None)
        .await
        .unwrap();

    // Project config wins for keys it sets
    assert_eq!(config.llm.model, "gemma2-9b-it");
    assert_eq!(config.pipeline.variant, PipelineVariant::Reviewed);
    // User keys the project file leaves alone survive
    assert_eq!(config.llm.timeout_secs, 30);
    assert_eq!(config.logging.level, "info");
    // Untouched keys keep defaults
    assert_eq!(config.llm.api_key_env, "GROQ_API_KEY");
}

#[tokio::test]
async fn test_explicit_config_applied_last() {
    let temp_dir = TempDir::new().unwrap();
    let project = write_config(
        temp_dir.path(),
        "project.toml",
        "[pipeline]\nvariant = \"reviewed\"\n",
    );
    let explicit = write_config(
        temp_dir.path(),
        "explicit.toml",
        "[pipeline]\nvariant = \"simple\"\n\n[llm]\ntemperature = 0.2\n",
    );

    let config = ConfigLoader::with_paths(None, Some(project))
        .load(Some(&explicit))
        .await
        .unwrap();

    assert_eq!(config.pipeline.variant, PipelineVariant::Simple);
    assert_eq!(config.llm.temperature, Some(0.2));
}

#[tokio::test]
async fn test_missing_explicit_config_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = ConfigLoader::with_paths(None, None)
        .load(Some(&temp_dir.path().join("nope.toml")))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Config file not found"));
}

#[tokio::test]
async fn test_malformed_config_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let user = write_config(temp_dir.path(), "user.toml", "[llm\nmodel = ");

    let err = ConfigLoader::with_paths(Some(user), None)
        .load(None)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Failed to parse config"));
}

#[tokio::test]
async fn test_api_key_expanded_from_env() {
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("JOKEBOT_IT_KEY", "gsk_test_value");
    let user = write_config(
        temp_dir.path(),
        "user.toml",
        "[llm]\napi_key = \"${JOKEBOT_IT_KEY}\"\n",
    );

    let config = ConfigLoader::with_paths(Some(user), None)
        .load(None)
        .await
        .unwrap();

    assert_eq!(config.llm.api_key.as_deref(), Some("gsk_test_value"));
    assert_eq!(config.remote_config().unwrap().api_key, "gsk_test_value");
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_config_resolution_is_logged() {
    let temp_dir = TempDir::new().unwrap();
    let project = write_config(
        temp_dir.path(),
        "project.toml",
        "[pipeline]\nvariant = \"simple\"\n",
    );

    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    ConfigLoader::with_paths(Some(temp_dir.path().join("missing-user.toml")), Some(project))
        .load(None)
        .await
        .unwrap();

    let text = logs.text();
    assert!(text.contains("Config file not found, skipping"), "{text}");
    assert!(text.contains("scope=\"user\""), "{text}");
    assert!(text.contains("Loaded config file"), "{text}");
    assert!(text.contains("Configuration loaded"), "{text}");
    assert!(text.contains("variant=simple"), "{text}");
}

async fn drive(model: Arc<ScriptedChatModel>, variant: PipelineVariant, input: &str) -> String {
    let pipeline = JokePipeline::build(variant, model, MemoryStore::new()).unwrap();
    let mut out = Vec::new();
    run_interactive(&pipeline, BufReader::new(input.as_bytes()), &mut out)
        .await
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_interactive_runs_topics_until_exit() {
    let model = Arc::new(ScriptedChatModel::with_replies([
        "Cats are liquid.",
        "3/10, too short.",
        "Cats: part liquid, all fun.",
    ]));

    let out = drive(model.clone(), PipelineVariant::Memory, "\n   \ncats\nEXIT\ndogs\n").await;

    assert!(out.contains("Welcome"));
    assert!(out.contains("🧠 Original Joke:\n Cats are liquid."));
    assert!(out.contains("😂 Humor Score: 3"));
    assert!(out.contains("   1. Cats are liquid."));
    assert!(out.trim_end().ends_with(GOODBYE));
    // Blank lines ignored, nothing after exit
    assert_eq!(model.calls(), 3);
    assert_eq!(out.matches("Enter a topic: ").count(), 4);
}

#[tokio::test]
async fn test_interactive_stops_at_end_of_input() {
    let model = Arc::new(ScriptedChatModel::with_replies(["Knock knock."]));

    let out = drive(model.clone(), PipelineVariant::Simple, "doors").await;

    assert!(out.contains("Knock knock."));
    assert!(out.trim_end().ends_with(GOODBYE));
    assert_eq!(model.calls(), 1);
}

#[tokio::test]
async fn test_interactive_reports_errors_and_continues() {
    let model = Arc::new(
        ScriptedChatModel::new()
            .with_failure("Rate limit exceeded: 429")
            .with_reply("Second try."),
    );

    let out = drive(model.clone(), PipelineVariant::Simple, "first\nsecond\nquit\n").await;

    assert!(out.contains("Error: Node 'tell_joke' execution failed"));
    assert!(out.contains("429"));
    assert!(out.contains("Second try."));
    assert_eq!(model.calls(), 2);
}
