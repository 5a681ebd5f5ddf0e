//! Semantic Guess core - round state machine and oracle contract.
//!
//! A secret word is chosen by an external oracle, the player submits guesses,
//! and the same oracle scores semantic similarity, validates each guess,
//! supplies an emoji, and writes progressive hints. This crate holds the only
//! local logic: the per-round state machine and its contract with the oracle.
//!
//! # Architecture
//!
//! - **Session**: pure state machine (`apply` an intent, `resolve` an outcome)
//! - **Oracle**: async trait with three total operations
//! - **Game**: runs oracle calls on tokio and publishes session snapshots
//!
//! # Example
//!
//! ```
//! use semantic_guess_core::{Intent, Language, Phase, Session};
//!
//! let mut session = Session::new(Language::English);
//! let effect = session.apply(Intent::StartRound);
//! assert!(effect.is_some());
//! assert_eq!(session.phase(), Phase::Loading);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod language;
mod oracle;
mod phase;
mod record;
mod score;
mod session;
mod transition;

pub use game::Game;
pub use language::Language;
pub use oracle::{Oracle, run_effect};
pub use phase::{Notice, Phase};
pub use record::{
    GuessRecord, GuessVerdict, RecordOrigin, REJECTED_GLYPH, REVEAL_GLYPH, UNKNOWN_GLYPH,
};
pub use score::{HintLevel, MAX_HINTS, Score, SimilarityBand};
pub use session::Session;
pub use transition::{Effect, Intent, Outcome, RoundId};
