//! Game configuration loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use semantic_guess_core::Language;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::llm_client::{LlmConfig, LlmProvider};
use crate::oracle::{DEFAULT_TIMEOUT, WORD_TEMPERATURE};

/// Configuration for the game and its oracle.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// LLM provider (openai, anthropic or gemini).
    #[serde(default = "default_provider")]
    llm_provider: LlmProvider,

    /// LLM model name (e.g., "gpt-4o-mini", "gemini-2.5-flash").
    #[serde(default = "default_model")]
    llm_model: String,

    /// Maximum tokens for LLM responses.
    #[serde(default = "default_max_tokens")]
    llm_max_tokens: u32,

    /// Override for the provider's API base URL.
    #[serde(default)]
    llm_base_url: Option<String>,

    /// Bound on a single oracle call, in seconds.
    #[serde(default = "default_timeout_secs")]
    oracle_timeout_secs: u64,

    /// Sampling temperature for target word generation.
    #[serde(default = "default_word_temperature")]
    word_temperature: f32,

    /// Language of the first round.
    #[serde(default)]
    language: Language,

    /// Where the terminal UI writes its logs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_provider() -> LlmProvider {
    LlmProvider::OpenAI
}

#[instrument]
fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

#[instrument]
fn default_max_tokens() -> u32 {
    256
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_word_temperature() -> f32 {
    WORD_TEMPERATURE
}

fn default_log_file() -> PathBuf {
    PathBuf::from("semantic_guess.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            llm_provider: default_provider(),
            llm_model: default_model(),
            llm_max_tokens: default_max_tokens(),
            llm_base_url: None,
            oracle_timeout_secs: default_timeout_secs(),
            word_temperature: default_word_temperature(),
            language: Language::default(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(provider = %config.llm_provider, model = %config.llm_model, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the language of the first round.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Bound on a single oracle call.
    pub fn oracle_timeout(&self) -> Duration {
        Duration::from_secs(self.oracle_timeout_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.oracle_timeout_secs == 0 {
            return Err(ConfigError::new(
                "oracle_timeout_secs must be at least 1".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.word_temperature) {
            return Err(ConfigError::new(format!(
                "word_temperature must be between 0 and 2, got {}",
                self.word_temperature
            )));
        }
        Ok(())
    }

    /// Creates LLM configuration from this config.
    /// Requires the provider's API key environment variable.
    #[instrument(skip(self), fields(provider = ?self.llm_provider, model = %self.llm_model))]
    pub fn create_llm_config(&self) -> Result<LlmConfig, ConfigError> {
        debug!("Creating LLM config");

        let var = self.llm_provider.api_key_var();
        let api_key = std::env::var(var)
            .map_err(|_| ConfigError::new(format!("{} environment variable not set", var)))?;

        Ok(LlmConfig::new(
            self.llm_provider,
            api_key,
            self.llm_model.clone(),
            self.llm_max_tokens,
            self.llm_base_url.clone(),
        ))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
