//! The round state machine.
//!
//! [`Session::apply`] handles the synchronous half of every transition and
//! names the oracle call to make; [`Session::resolve`] applies the call's
//! completion. Neither performs I/O, so every transition is testable without
//! an oracle.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::language::Language;
use crate::phase::{Notice, Phase};
use crate::record::{GuessRecord, GuessVerdict};
use crate::score::{HintLevel, MAX_HINTS};
use crate::transition::{Effect, Intent, Outcome, RoundId};

/// All mutable state of the live round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    language: Language,
    round: RoundId,
    target_word: Option<String>,
    history: Vec<GuessRecord>,
    hints_used: u8,
    latest_hint: Option<String>,
    phase: Phase,
    pending_submission: bool,
    pending_hint: bool,
    input: String,
    notice: Option<Notice>,
}

impl Session {
    /// Creates an idle session. No round has started yet.
    #[instrument]
    pub fn new(language: Language) -> Self {
        Self::loading(language, 0)
    }

    fn loading(language: Language, round: RoundId) -> Self {
        Self {
            language,
            round,
            target_word: None,
            history: Vec::new(),
            hints_used: 0,
            latest_hint: None,
            phase: Phase::Loading,
            pending_submission: false,
            pending_hint: false,
            input: String::new(),
            notice: None,
        }
    }

    /// Language of the current round.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Identifier of the current round.
    pub fn round(&self) -> RoundId {
        self.round
    }

    /// Secret target word, once loaded.
    pub fn target_word(&self) -> Option<&str> {
        self.target_word.as_deref()
    }

    /// Accepted records, newest first.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Hints requested this round.
    pub fn hints_used(&self) -> u8 {
        self.hints_used
    }

    /// Hints still available this round.
    pub fn hints_remaining(&self) -> u8 {
        MAX_HINTS.saturating_sub(self.hints_used)
    }

    /// Most recent hint text.
    pub fn latest_hint(&self) -> Option<&str> {
        self.latest_hint.as_deref()
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a guess is being evaluated.
    pub fn pending_submission(&self) -> bool {
        self.pending_submission
    }

    /// True while a hint is being generated.
    pub fn pending_hint(&self) -> bool {
        self.pending_hint
    }

    /// Current contents of the guess field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Message to show the player, if any.
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// True when the guess field accepts edits.
    pub fn input_enabled(&self) -> bool {
        self.phase == Phase::Playing && !self.pending_submission
    }

    /// True when [`Intent::Submit`] would be processed.
    pub fn can_submit(&self) -> bool {
        self.input_enabled() && !self.input.trim().is_empty()
    }

    /// True when [`Intent::RequestHint`] would be processed.
    pub fn can_request_hint(&self) -> bool {
        self.phase == Phase::Playing && self.hints_used < MAX_HINTS && !self.pending_hint
    }

    /// True when [`Intent::GiveUp`] would be processed.
    pub fn can_give_up(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Applies a user intent.
    ///
    /// Returns the oracle call the transition needs. Intents arriving in the
    /// wrong phase, or while their guard is held, are ignored.
    #[instrument(skip(self), fields(round = self.round, phase = %self.phase))]
    pub fn apply(&mut self, intent: Intent) -> Option<Effect> {
        match intent {
            Intent::StartRound => Some(self.start_round(self.language)),
            Intent::ToggleLanguage => {
                let language = self.language.toggle();
                info!(%language, "Switching language");
                Some(self.start_round(language))
            }
            Intent::EditInput(text) => {
                if self.input_enabled() {
                    self.input = text;
                } else {
                    debug!("Input locked, edit ignored");
                }
                None
            }
            Intent::Submit => self.submit(),
            Intent::RequestHint => self.request_hint(),
            Intent::GiveUp => {
                self.give_up();
                None
            }
        }
    }

    /// Applies the completion of an oracle call.
    ///
    /// Completions belonging to an abandoned round are discarded.
    #[instrument(skip(self, outcome), fields(round = self.round, phase = %self.phase))]
    pub fn resolve(&mut self, outcome: Outcome) {
        if outcome.round() != self.round {
            debug!(stale_round = outcome.round(), "Discarding outcome of abandoned round");
            return;
        }
        match outcome {
            Outcome::WordLoaded { word, .. } => self.word_loaded(word),
            Outcome::GuessEvaluated { guess, verdict, .. } => self.guess_evaluated(guess, verdict),
            Outcome::HintReady { hint, .. } => {
                self.pending_hint = false;
                self.latest_hint = Some(hint);
            }
        }
    }

    fn start_round(&mut self, language: Language) -> Effect {
        let round = self.round + 1;
        info!(round, %language, "Starting new round");
        *self = Self::loading(language, round);
        Effect::LoadWord { round, language }
    }

    fn word_loaded(&mut self, word: Option<String>) {
        if self.phase != Phase::Loading {
            debug!("Word arrived outside loading phase, ignored");
            return;
        }
        match word.map(|w| w.trim().to_string()).filter(|w| !w.is_empty()) {
            Some(word) => {
                info!("Target word ready");
                self.target_word = Some(word);
                self.phase = Phase::Playing;
                self.notice = None;
            }
            None => {
                warn!("No target word could be established");
                self.notice = Some(Notice::LoadFailed);
            }
        }
    }

    fn submit(&mut self) -> Option<Effect> {
        if !self.can_submit() {
            debug!(pending = self.pending_submission, "Submit ignored");
            return None;
        }
        let target = self.target_word.clone()?;
        let guess = self.input.trim().to_string();
        self.pending_submission = true;
        self.notice = None;
        debug!(%guess, "Submitting guess");
        Some(Effect::Evaluate {
            round: self.round,
            target,
            guess,
            language: self.language,
        })
    }

    fn guess_evaluated(&mut self, guess: String, verdict: GuessVerdict) {
        self.pending_submission = false;
        if self.phase != Phase::Playing {
            debug!(%guess, "Round already over, verdict discarded");
            return;
        }
        match GuessRecord::from_verdict(guess, verdict) {
            Some(record) => {
                let won = record.is_winning_guess();
                info!(word = %record.word(), score = %record.score(), won, "Guess accepted");
                self.history.insert(0, record);
                self.input.clear();
                if won {
                    self.phase = Phase::Won;
                }
            }
            None => {
                debug!("Guess rejected by oracle");
                self.notice = Some(Notice::InvalidGuess);
            }
        }
    }

    fn request_hint(&mut self) -> Option<Effect> {
        if !self.can_request_hint() {
            debug!(hints_used = self.hints_used, "Hint request ignored");
            return None;
        }
        let target = self.target_word.clone()?;
        let level = HintLevel::new(self.hints_used + 1)?;
        self.hints_used = level.value();
        self.pending_hint = true;
        info!(%level, "Requesting hint");
        Some(Effect::Hint {
            round: self.round,
            target,
            language: self.language,
            level,
        })
    }

    fn give_up(&mut self) {
        if !self.can_give_up() {
            debug!("Give up ignored");
            return;
        }
        let Some(target) = self.target_word.clone() else {
            return;
        };
        info!("Player gave up");
        self.phase = Phase::Lost;
        self.history
            .insert(0, GuessRecord::reveal(target, self.language));
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
