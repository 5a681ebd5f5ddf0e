//! Intents entering the state machine, the oracle calls it requests, and the
//! completions that come back.

use crate::language::Language;
use crate::record::GuessVerdict;
use crate::score::HintLevel;

/// Identifies a round. Bumped every time a round starts.
pub type RoundId = u64;

/// A user action forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Initial mount, restart, skip, or next word after a loss.
    StartRound,
    /// Flip the language and start a new round.
    ToggleLanguage,
    /// Replace the text in the guess field.
    EditInput(String),
    /// Submit the current guess field.
    Submit,
    /// Ask for the next hint.
    RequestHint,
    /// Reveal the answer and end the round.
    GiveUp,
}

/// An oracle call requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Pick a target word for a new round.
    LoadWord {
        /// Round the word is for.
        round: RoundId,
        /// Language of the round.
        language: Language,
    },
    /// Judge a guess against the target.
    Evaluate {
        /// Round the guess belongs to.
        round: RoundId,
        /// Secret target word.
        target: String,
        /// Trimmed guess text.
        guess: String,
        /// Language of the round.
        language: Language,
    },
    /// Produce a hint of the given level.
    Hint {
        /// Round the hint belongs to.
        round: RoundId,
        /// Secret target word.
        target: String,
        /// Language of the round.
        language: Language,
        /// Requested specificity.
        level: HintLevel,
    },
}

impl Effect {
    /// Round this effect belongs to.
    pub fn round(&self) -> RoundId {
        match self {
            Self::LoadWord { round, .. }
            | Self::Evaluate { round, .. }
            | Self::Hint { round, .. } => *round,
        }
    }

    /// The outcome to apply when the call never completed.
    ///
    /// Carries the same fallback the oracle would have produced, so every
    /// guard an effect set is still released.
    pub fn failed(&self) -> Outcome {
        match self {
            Self::LoadWord { round, .. } => Outcome::WordLoaded {
                round: *round,
                word: None,
            },
            Self::Evaluate { round, guess, .. } => Outcome::GuessEvaluated {
                round: *round,
                guess: guess.clone(),
                verdict: GuessVerdict::rejected(),
            },
            Self::Hint {
                round, language, ..
            } => Outcome::HintReady {
                round: *round,
                hint: language.failed_hint_fallback().to_string(),
            },
        }
    }
}

/// The completion of an [`Effect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A target word arrived. `None` means no word could be established.
    WordLoaded {
        /// Round the word is for.
        round: RoundId,
        /// The word, if any.
        word: Option<String>,
    },
    /// A guess was judged.
    GuessEvaluated {
        /// Round the guess belongs to.
        round: RoundId,
        /// Trimmed guess text.
        guess: String,
        /// The oracle's judgement.
        verdict: GuessVerdict,
    },
    /// A hint arrived.
    HintReady {
        /// Round the hint belongs to.
        round: RoundId,
        /// Hint text.
        hint: String,
    },
}

impl Outcome {
    /// Round this outcome belongs to.
    pub fn round(&self) -> RoundId {
        match self {
            Self::WordLoaded { round, .. }
            | Self::GuessEvaluated { round, .. }
            | Self::HintReady { round, .. } => *round,
        }
    }
}
