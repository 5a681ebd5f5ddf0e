//! Semantic Guess - a word-guessing game scored by a language model.
//!
//! The secret word, similarity scores, validity checks, emoji and hints all
//! come from an external language model. This crate connects that model to
//! the round state machine in [`semantic_guess_core`] and presents it in the
//! terminal.
//!
//! # Architecture
//!
//! - **LLM client**: OpenAI, Anthropic or Gemini behind [`TextGenerator`]
//! - **Oracle**: [`LlmOracle`], prompts plus the evaluation schema, never fails
//! - **Config**: [`GameConfig`] from TOML and environment
//! - **TUI**: ratatui view derived from session snapshots
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use semantic_guess::{GameConfig, LlmClient, LlmOracle};
//! use semantic_guess_core::{Game, Intent};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let oracle = LlmOracle::new(LlmClient::new(config.create_llm_config()?));
//! let mut game = Game::new(Arc::new(oracle), *config.language());
//! game.dispatch(Intent::StartRound);
//! game.settle().await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod llm_client;
mod oracle;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - LLM client
pub use llm_client::{
    CompletionRequest, LlmClient, LlmConfig, LlmError, LlmProvider, TextGenerator,
};

// Crate-level exports - Oracle
pub use oracle::{
    DEFAULT_TIMEOUT, EvaluationPayload, LlmOracle, WORD_TEMPERATURE, clean_word,
    evaluation_schema, parse_evaluation,
};
