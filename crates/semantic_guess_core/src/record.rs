//! Oracle verdicts and the guess records kept in a round's history.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::score::Score;

/// Glyph used when the oracle omits an emoji.
pub const UNKNOWN_GLYPH: &str = "❓";

/// Glyph carried by a rejected verdict.
pub const REJECTED_GLYPH: &str = "❌";

/// Glyph carried by the give-up reveal record.
pub const REVEAL_GLYPH: &str = "🔓";

/// The oracle's judgement of a single guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessVerdict {
    /// Semantic similarity to the target.
    pub score: Score,
    /// False when the guess is gibberish or misspelt.
    pub is_valid: bool,
    /// A single glyph representing the guessed concept.
    pub emoji: String,
    /// Optional short encouragement.
    pub feedback: Option<String>,
}

impl GuessVerdict {
    /// Builds an accepted verdict.
    pub fn accepted(score: Score, emoji: impl Into<String>, feedback: Option<String>) -> Self {
        Self {
            score,
            is_valid: true,
            emoji: emoji.into(),
            feedback,
        }
    }

    /// The deterministic result of a failed evaluation.
    pub fn rejected() -> Self {
        Self {
            score: Score::ZERO,
            is_valid: false,
            emoji: REJECTED_GLYPH.to_string(),
            feedback: None,
        }
    }
}

/// Where a history record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordOrigin {
    /// An accepted player guess.
    Guess,
    /// Synthesized locally when the player gives up.
    Reveal,
}

/// An accepted entry in the round history.
///
/// Only valid verdicts become records, so a record is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GuessRecord {
    word: String,
    score: Score,
    emoji: String,
    feedback: Option<String>,
    origin: RecordOrigin,
}

impl GuessRecord {
    /// Builds a record from an accepted verdict.
    ///
    /// Returns `None` for a rejected verdict; rejected guesses never enter
    /// the history.
    pub fn from_verdict(word: impl Into<String>, verdict: GuessVerdict) -> Option<Self> {
        if !verdict.is_valid {
            return None;
        }
        let emoji = if verdict.emoji.trim().is_empty() {
            UNKNOWN_GLYPH.to_string()
        } else {
            verdict.emoji
        };
        Some(Self {
            word: word.into(),
            score: verdict.score,
            emoji,
            feedback: verdict.feedback,
            origin: RecordOrigin::Guess,
        })
    }

    /// Builds the record that reveals the target after giving up.
    pub fn reveal(target: impl Into<String>, language: Language) -> Self {
        Self {
            word: target.into(),
            score: Score::PERFECT,
            emoji: REVEAL_GLYPH.to_string(),
            feedback: Some(language.reveal_feedback().to_string()),
            origin: RecordOrigin::Reveal,
        }
    }

    /// Always true: history never holds rejected guesses.
    pub fn is_valid(&self) -> bool {
        true
    }

    /// True when this record is an exact match made by the player.
    pub fn is_winning_guess(&self) -> bool {
        self.origin == RecordOrigin::Guess && self.score.is_perfect()
    }
}
