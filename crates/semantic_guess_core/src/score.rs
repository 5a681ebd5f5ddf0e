//! Similarity scores, their bands, and hint levels.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Number of hints available per round.
pub const MAX_HINTS: u8 = 3;

/// Semantic similarity between a guess and the target, in `0..=100`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// An exact match or synonym. Wins the round.
    pub const PERFECT: Score = Score(100);

    /// Completely unrelated, also the failure value.
    pub const ZERO: Score = Score(0);

    /// Builds a score from an integer, clamping to `0..=100`.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Builds a score from the raw number an oracle returned.
    ///
    /// Rounds to the nearest integer and clamps to `0..=100`. Non-finite
    /// values become zero.
    pub fn from_raw(raw: f64) -> Self {
        if !raw.is_finite() {
            return Self::ZERO;
        }
        Self(raw.round().clamp(0.0, 100.0) as u8)
    }

    /// Returns the numeric value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// True for an exact match.
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// The similarity band this score falls in.
    pub fn band(self) -> SimilarityBand {
        match self.0 {
            100 => SimilarityBand::Exact,
            75..=99 => SimilarityBand::Close,
            50..=74 => SimilarityBand::Related,
            25..=49 => SimilarityBand::Loose,
            _ => SimilarityBand::Unrelated,
        }
    }
}

/// Scoring bands the oracle is instructed to follow.
///
/// The client never recomputes a score; these only name the ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum SimilarityBand {
    /// 0 to 24: completely different.
    Unrelated,
    /// 25 to 49: loosely related.
    Loose,
    /// 50 to 74: related field, such as cat vs animal.
    Related,
    /// 75 to 99: very close concept, such as cat vs kitten.
    Close,
    /// 100: exact match or synonym.
    Exact,
}

/// Specificity of a hint, from 1 (vague) to 3 (nearly explicit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
pub struct HintLevel(u8);

impl HintLevel {
    /// Returns a level if `level` is within `1..=MAX_HINTS`.
    pub fn new(level: u8) -> Option<Self> {
        (1..=MAX_HINTS).contains(&level).then_some(Self(level))
    }

    /// Returns the numeric level.
    pub fn value(self) -> u8 {
        self.0
    }
}
