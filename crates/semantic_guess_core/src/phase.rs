//! Round lifecycle phases and user-facing notices.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Lifecycle phase of a round.
///
/// `Loading -> Playing -> {Won, Lost}`. Any phase returns to `Loading` only
/// through an explicit new-round intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// Waiting for the oracle to pick a target word.
    #[default]
    Loading,
    /// Accepting guesses, hints and give-up.
    Playing,
    /// The player guessed the target.
    Won,
    /// The player gave up and the target was revealed.
    Lost,
}

impl Phase {
    /// True for `Won` and `Lost`.
    pub fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A short, non-blocking message for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notice {
    /// The oracle rejected the last guess. The round continues.
    InvalidGuess,
    /// No target word could be established. The round stays loading.
    LoadFailed,
}

impl Notice {
    /// Localized text for this notice.
    pub fn text(self, language: Language) -> &'static str {
        match self {
            Self::InvalidGuess => language.invalid_guess_message(),
            Self::LoadFailed => language.load_failure_message(),
        }
    }
}
