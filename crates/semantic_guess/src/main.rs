//! Semantic Guess - Unified CLI
//!
//! Play in the terminal, or query the oracle one call at a time.

#![warn(missing_docs)]

mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use semantic_guess::{GameConfig, LlmClient, LlmOracle};
use semantic_guess_core::{HintLevel, Oracle};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { language } => {
            let mut config = GameConfig::load_or_default(&cli.config)?;
            if let Some(language) = language {
                config = config.with_language(language);
            }
            semantic_guess::tui::run_tui(config).await
        }
        Command::Word { language } => {
            let oracle = build_oracle(&cli.config)?;
            let word = oracle.generate_target_word(language).await;
            println!("{}", word);
            Ok(())
        }
        Command::Judge {
            target,
            guess,
            language,
        } => {
            let oracle = build_oracle(&cli.config)?;
            let verdict = oracle.evaluate_guess(&target, &guess, language).await;
            println!("{}", serde_json::to_string_pretty(&verdict)?);
            Ok(())
        }
        Command::Hint {
            target,
            level,
            language,
        } => {
            let level = HintLevel::new(level)
                .with_context(|| format!("Hint level {} out of range 1-3", level))?;
            let oracle = build_oracle(&cli.config)?;
            let hint = oracle.generate_hint(&target, language, level).await;
            println!("{}", hint);
            Ok(())
        }
    }
}

/// Logs to stderr so stdout carries only the answer.
fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Builds the oracle used by the one-shot subcommands.
#[instrument]
fn build_oracle(config_path: &Path) -> Result<LlmOracle<LlmClient>> {
    init_stderr_tracing();
    let config = GameConfig::load_or_default(config_path)?;
    info!(provider = ?config.llm_provider(), "Building oracle");

    let llm = LlmClient::new(config.create_llm_config()?);
    Ok(LlmOracle::new(llm)
        .with_timeout(config.oracle_timeout())
        .with_word_temperature(*config.word_temperature()))
}
