//! [`Oracle`] implementation backed by a language model.

use std::time::Duration;

use semantic_guess_core::{GuessVerdict, HintLevel, Language, Oracle};
use tracing::{debug, info, instrument, warn};

use crate::llm_client::{CompletionRequest, LlmError, TextGenerator};
use crate::oracle::contract::{evaluation_schema, parse_evaluation};
use crate::oracle::prompts;

/// Default bound on a single oracle call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Oracle that prompts a [`TextGenerator`] and never fails outward.
///
/// Each call is bounded by a timeout; expiry, transport errors, empty answers
/// and malformed JSON all resolve to the documented fallbacks.
#[derive(Debug, Clone)]
pub struct LlmOracle<G> {
    generator: G,
    timeout: Duration,
    word_temperature: f32,
    schema: serde_json::Value,
}

impl<G: TextGenerator> LlmOracle<G> {
    /// Creates an oracle with the default timeout and word temperature.
    #[instrument(skip(generator))]
    pub fn new(generator: G) -> Self {
        info!("Creating LLM oracle");
        Self {
            generator,
            timeout: DEFAULT_TIMEOUT,
            word_temperature: prompts::WORD_TEMPERATURE,
            schema: evaluation_schema(),
        }
    }

    /// Sets the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the sampling temperature for word generation.
    pub fn with_word_temperature(mut self, temperature: f32) -> Self {
        self.word_temperature = temperature;
        self
    }

    /// Runs one request under the timeout.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        match tokio::time::timeout(self.timeout, self.generator.generate(request)).await {
            Ok(result) => result,
            Err(_) => Err(LlmError::new(format!(
                "Oracle call timed out after {:?}",
                self.timeout
            ))),
        }
    }
}

/// Reduces a model answer to a bare lowercase word.
///
/// Keeps the first non-empty line and strips quotes and punctuation around it.
pub fn clean_word(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .trim_matches(|c: char| c.is_ascii_punctuation() || matches!(c, '“' | '”' | '‘' | '’'))
        .trim()
        .to_lowercase()
}

#[async_trait::async_trait]
impl<G: TextGenerator> Oracle for LlmOracle<G> {
    #[instrument(skip(self))]
    async fn generate_target_word(&self, language: Language) -> String {
        let request = prompts::target_word(language, self.word_temperature);
        match self.complete(&request).await {
            Ok(text) => {
                let word = clean_word(&text);
                if word.is_empty() {
                    warn!("Oracle returned no word, using fallback");
                    language.empty_word_fallback().to_string()
                } else {
                    // Never log the secret above debug.
                    debug!(%word, "Target word generated");
                    word
                }
            }
            Err(e) => {
                warn!(error = %e, "Error generating word, using fallback");
                language.failed_word_fallback().to_string()
            }
        }
    }

    #[instrument(skip(self, target))]
    async fn evaluate_guess(&self, target: &str, guess: &str, language: Language) -> GuessVerdict {
        let request = prompts::evaluation(target, guess, language, self.schema.clone());
        let text = match self.complete(&request).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Error evaluating guess");
                return GuessVerdict::rejected();
            }
        };
        match parse_evaluation(&text) {
            Ok(payload) => {
                let verdict = payload.into_verdict();
                info!(score = %verdict.score, valid = verdict.is_valid, "Guess evaluated");
                verdict
            }
            Err(e) => {
                warn!(error = %e, response = %text, "Malformed evaluation response");
                GuessVerdict::rejected()
            }
        }
    }

    #[instrument(skip(self, target))]
    async fn generate_hint(&self, target: &str, language: Language, level: HintLevel) -> String {
        let request = prompts::hint(target, language, level);
        match self.complete(&request).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                warn!("Oracle returned an empty hint");
                language.empty_hint_fallback().to_string()
            }
            Err(e) => {
                warn!(error = %e, "Error generating hint");
                language.failed_hint_fallback().to_string()
            }
        }
    }
}
