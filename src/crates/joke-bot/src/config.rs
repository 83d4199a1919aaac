//! Configuration loading
//!
//! Layers, later ones winning:
//! 1. Default values
//! 2. User-level config: ~/.jokebot/jokebot.toml
//! 3. Project-level config: ./.jokebot/jokebot.toml
//! 4. An explicit `--config <path>`, which must exist
//!
//! Command-line flags are applied on top by the binary. Each file only
//! overrides the keys it sets.

use anyhow::{bail, Context, Result};
use graph_core::llm::ChatConfig;
use joke_agents::PipelineVariant;
use llm::config::{GROQ_API_KEY_ENV, GROQ_BASE_URL, GROQ_DEFAULT_MODEL};
use llm::RemoteLlmConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tracing::{debug, info};

const CONFIG_DIR: &str = ".jokebot";
const CONFIG_FILE: &str = "jokebot.toml";

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct JokeBotConfig {
    pub llm: LlmSection,
    pub pipeline: PipelineSection,
    pub logging: LoggingSection,
}

/// Model provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmSection {
    /// Only "groq" is supported
    pub provider: String,
    pub model: String,
    pub base_url: String,
    /// Environment variable read for the API key
    pub api_key_env: String,
    /// Literal key; takes precedence over `api_key_env`. `${VAR}` is expanded.
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub temperature: Option<f32>,
}

impl Default for LlmSection {
    fn default() -> Self {
        Self {
            provider: "groq".to_string(),
            model: GROQ_DEFAULT_MODEL.to_string(),
            base_url: GROQ_BASE_URL.to_string(),
            api_key_env: GROQ_API_KEY_ENV.to_string(),
            api_key: None,
            timeout_secs: 60,
            temperature: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PipelineSection {
    pub variant: PipelineVariant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Default filter when `RUST_LOG` is unset: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// One config file as written: every key optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub llm: LlmLayer,
    pub pipeline: PipelineLayer,
    pub logging: LoggingLayer,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LlmLayer {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub api_key_env: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineLayer {
    pub variant: Option<PipelineVariant>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingLayer {
    pub level: Option<String>,
}

impl JokeBotConfig {
    /// Override every key the layer sets
    pub fn merge(&mut self, layer: ConfigLayer) {
        let llm = layer.llm;
        if let Some(provider) = llm.provider {
            self.llm.provider = provider;
        }
        if let Some(model) = llm.model {
            self.llm.model = model;
        }
        if let Some(base_url) = llm.base_url {
            self.llm.base_url = base_url;
        }
        if let Some(api_key_env) = llm.api_key_env {
            self.llm.api_key_env = api_key_env;
        }
        if let Some(api_key) = llm.api_key {
            self.llm.api_key = Some(api_key);
        }
        if let Some(timeout_secs) = llm.timeout_secs {
            self.llm.timeout_secs = timeout_secs;
        }
        if let Some(temperature) = llm.temperature {
            self.llm.temperature = Some(temperature);
        }
        if let Some(variant) = layer.pipeline.variant {
            self.pipeline.variant = variant;
        }
        if let Some(level) = layer.logging.level {
            self.logging.level = level;
        }
    }

    /// Expand `${VAR}` in the literal API key
    pub fn resolve_env_vars(&mut self) {
        if let Some(api_key) = &self.llm.api_key {
            self.llm.api_key = Some(expand_env_var(api_key));
        }
    }

    /// Provider configuration for the model client
    pub fn remote_config(&self) -> Result<RemoteLlmConfig> {
        if !self.llm.provider.eq_ignore_ascii_case("groq") {
            bail!(
                "Unsupported LLM provider '{}' (only \"groq\" is available)",
                self.llm.provider
            );
        }

        let literal_key = self
            .llm
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && !key.starts_with("${"));

        let config = match literal_key {
            Some(key) => RemoteLlmConfig::new(key, &self.llm.base_url, &self.llm.model),
            None => RemoteLlmConfig::from_env(
                &self.llm.api_key_env,
                &self.llm.base_url,
                &self.llm.model,
            )
            .with_context(|| {
                format!(
                    "Set {} or llm.api_key in {}/{}",
                    self.llm.api_key_env, CONFIG_DIR, CONFIG_FILE
                )
            })?,
        };

        Ok(config.with_timeout(Duration::from_secs(self.llm.timeout_secs)))
    }

    /// Sampling options sent with every model call
    pub fn chat_config(&self) -> ChatConfig {
        ChatConfig {
            temperature: self.llm.temperature,
            ..ChatConfig::default()
        }
    }
}

/// `${VAR}` becomes the variable's value; anything else is returned as is
fn expand_env_var(value: &str) -> String {
    match value
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
    {
        Some(var_name) => std::env::var(var_name).unwrap_or_else(|_| value.to_string()),
        None => value.to_string(),
    }
}

/// Loads the user and project config files
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    user_config_path: Option<PathBuf>,
    project_config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            user_config_path: dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE)),
            project_config_path: std::env::current_dir()
                .ok()
                .map(|cwd| cwd.join(CONFIG_DIR).join(CONFIG_FILE)),
        }
    }

    /// Loader reading from the given locations instead of the standard ones
    pub fn with_paths(user_config_path: Option<PathBuf>, project_config_path: Option<PathBuf>) -> Self {
        Self {
            user_config_path,
            project_config_path,
        }
    }

    pub fn user_config_path(&self) -> Option<&Path> {
        self.user_config_path.as_deref()
    }

    pub fn project_config_path(&self) -> Option<&Path> {
        self.project_config_path.as_deref()
    }

    /// Defaults, then user, then project, then `explicit`.
    ///
    /// Missing user/project files are skipped. A file that exists but cannot
    /// be read or parsed is an error, as is a missing `explicit` file.
    pub async fn load(&self, explicit: Option<&Path>) -> Result<JokeBotConfig> {
        let mut config = JokeBotConfig::default();

        for (scope, path) in [
            ("user", self.user_config_path.as_deref()),
            ("project", self.project_config_path.as_deref()),
        ] {
            let Some(path) = path else {
                debug!(scope, "No config location available");
                continue;
            };
            if !fs::try_exists(path).await.unwrap_or(false) {
                debug!(scope, path = %path.display(), "Config file not found, skipping");
                continue;
            }
            config.merge(load_layer(path).await?);
            debug!(scope, path = %path.display(), "Loaded config file");
        }

        if let Some(path) = explicit {
            if !fs::try_exists(path).await.unwrap_or(false) {
                bail!("Config file not found: {}", path.display());
            }
            config.merge(load_layer(path).await?);
            debug!(path = %path.display(), "Loaded explicit config file");
        }

        config.resolve_env_vars();
        info!(
            model = %config.llm.model,
            variant = %config.pipeline.variant,
            "Configuration loaded"
        );
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

async fn load_layer(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
}
