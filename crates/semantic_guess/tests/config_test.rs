//! Tests for GameConfig loading from TOML.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use semantic_guess::{GameConfig, LlmProvider};
use semantic_guess_core::Language;
use tempfile::TempDir;

/// Writes `content` to a config file inside `dir` and returns its path.
fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("semantic_guess.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(*config.llm_provider(), LlmProvider::OpenAI);
    assert_eq!(config.llm_model(), "gpt-4o-mini");
    assert_eq!(config.oracle_timeout(), Duration::from_secs(20));
    assert_eq!(*config.word_temperature(), 1.2);
    assert_eq!(*config.language(), Language::Thai);
}

#[test]
fn test_full_config_loads() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r#"llm_provider = "gemini"
llm_model = "gemini-2.5-flash"
llm_max_tokens = 128
oracle_timeout_secs = 5
word_temperature = 0.9
language = "EN"
log_file = "game.log"
"#,
    );

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.llm_provider(), LlmProvider::Gemini);
    assert_eq!(config.llm_model(), "gemini-2.5-flash");
    assert_eq!(*config.llm_max_tokens(), 128);
    assert_eq!(config.oracle_timeout(), Duration::from_secs(5));
    assert_eq!(*config.word_temperature(), 0.9);
    assert_eq!(*config.language(), Language::English);
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "llm_provider = \"anthropic\"\n");

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.llm_provider(), LlmProvider::Anthropic);
    assert_eq!(config.llm_model(), "gpt-4o-mini");
    assert_eq!(*config.language(), Language::Thai);
}

#[test]
fn test_zero_timeout_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "oracle_timeout_secs = 0\n");

    let err = GameConfig::from_file(&path).expect_err("Zero timeout should fail");
    assert!(err.message.contains("oracle_timeout_secs"));
}

#[test]
fn test_out_of_range_temperature_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "word_temperature = 3.5\n");

    assert!(GameConfig::from_file(&path).is_err());
}

#[test]
fn test_unknown_provider_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "llm_provider = \"mystery\"\n");

    let err = GameConfig::from_file(&path).expect_err("Unknown provider should fail");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).expect("Load failed");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_language_override() {
    let config = GameConfig::default().with_language(Language::English);
    assert_eq!(*config.language(), Language::English);
}
