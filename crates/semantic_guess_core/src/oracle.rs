//! The external capability that picks words, judges guesses and writes hints.

use crate::language::Language;
use crate::record::GuessVerdict;
use crate::score::HintLevel;
use crate::transition::{Effect, Outcome};

/// Word oracle consulted by the game.
///
/// Every operation is total: implementations absorb their own failures and
/// return the documented fallback instead of an error, so the state machine
/// never needs an error branch for them.
#[async_trait::async_trait]
pub trait Oracle: Send + Sync {
    /// Picks a common everyday noun, trimmed and lowercased.
    ///
    /// Falls back to a fixed per-language word on failure.
    async fn generate_target_word(&self, language: Language) -> String;

    /// Judges `guess` against `target`.
    ///
    /// Falls back to [`GuessVerdict::rejected`] on failure.
    async fn evaluate_guess(&self, target: &str, guess: &str, language: Language) -> GuessVerdict;

    /// Writes a hint; level 1 is vague, level 3 nearly gives the word away.
    ///
    /// Falls back to a fixed "unavailable" text on failure.
    async fn generate_hint(&self, target: &str, language: Language, level: HintLevel) -> String;
}

/// Performs the oracle call an effect names and wraps the answer as its
/// outcome.
pub async fn run_effect<O: Oracle + ?Sized>(oracle: &O, effect: Effect) -> Outcome {
    match effect {
        Effect::LoadWord { round, language } => Outcome::WordLoaded {
            round,
            word: Some(oracle.generate_target_word(language).await),
        },
        Effect::Evaluate {
            round,
            target,
            guess,
            language,
        } => {
            let verdict = oracle.evaluate_guess(&target, &guess, language).await;
            Outcome::GuessEvaluated {
                round,
                guess,
                verdict,
            }
        }
        Effect::Hint {
            round,
            target,
            language,
            level,
        } => Outcome::HintReady {
            round,
            hint: oracle.generate_hint(&target, language, level).await,
        },
    }
}
