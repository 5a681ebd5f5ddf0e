//! Supported play languages and their fixed, localized strings.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Language of a round.
///
/// Selects prompt wording, fallback values and every piece of fixed text the
/// presentation layer shows. Thai is the primary language and the default.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    /// Thai (primary).
    #[default]
    #[serde(rename = "TH")]
    #[strum(serialize = "TH")]
    Thai,
    /// English (secondary).
    #[serde(rename = "EN")]
    #[strum(serialize = "EN")]
    English,
}

impl Language {
    /// Returns the other supported language.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Thai => Self::English,
            Self::English => Self::Thai,
        }
    }

    /// Two-letter code used in prompts and configuration.
    pub fn code(self) -> &'static str {
        match self {
            Self::Thai => "TH",
            Self::English => "EN",
        }
    }

    /// Flag label for the language selector.
    pub fn flag_label(self) -> &'static str {
        match self {
            Self::Thai => "🇹🇭 TH",
            Self::English => "🇺🇸 EN",
        }
    }

    /// Target word used when the oracle answers with nothing.
    pub fn empty_word_fallback(self) -> &'static str {
        match self {
            Self::Thai => "แมว",
            Self::English => "cat",
        }
    }

    /// Target word used when the oracle call fails outright.
    pub fn failed_word_fallback(self) -> &'static str {
        match self {
            Self::Thai => "ความสุข",
            Self::English => "happiness",
        }
    }

    /// Hint text used when the oracle answers with nothing.
    pub fn empty_hint_fallback(self) -> &'static str {
        "No hint available."
    }

    /// Hint text used when the oracle call fails outright.
    pub fn failed_hint_fallback(self) -> &'static str {
        "Hint machine broken 🤖"
    }

    /// Shown when the oracle rejects a guess as meaningless.
    pub fn invalid_guess_message(self) -> &'static str {
        match self {
            Self::Thai => "โปรดพิมพ์คำที่มีความหมาย",
            Self::English => "Please enter a meaningful word",
        }
    }

    /// Shown when a round could not establish a target word.
    pub fn load_failure_message(self) -> &'static str {
        match self {
            Self::Thai => "โหลดเกมไม่สำเร็จ ลองใหม่อีกครั้ง",
            Self::English => "Failed to load game. Please try again.",
        }
    }

    /// Feedback attached to the give-up reveal record.
    pub fn reveal_feedback(self) -> &'static str {
        match self {
            Self::Thai => "เฉลยครับ!",
            Self::English => "The Answer!",
        }
    }

    /// Banner shown after a win.
    pub fn win_banner(self) -> &'static str {
        match self {
            Self::Thai => "ยินดีด้วย! 🎉",
            Self::English => "You Won! 🎉",
        }
    }

    /// Label preceding the revealed answer after giving up.
    pub fn answer_label(self) -> &'static str {
        match self {
            Self::Thai => "เฉลย: ",
            Self::English => "Answer: ",
        }
    }

    /// Action label for starting over after a win.
    pub fn play_again_label(self) -> &'static str {
        match self {
            Self::Thai => "เล่นอีกครั้ง",
            Self::English => "Play Again",
        }
    }

    /// Action label for moving on after giving up.
    pub fn next_word_label(self) -> &'static str {
        match self {
            Self::Thai => "ข้ามไปคำต่อไป",
            Self::English => "Next Word",
        }
    }

    /// Placeholder for the empty guess field.
    pub fn input_placeholder(self) -> &'static str {
        match self {
            Self::Thai => "พิมพ์คำทายที่นี่...",
            Self::English => "Type your guess...",
        }
    }

    /// Prompt shown while the history is still empty.
    pub fn empty_history_prompt(self) -> &'static str {
        match self {
            Self::Thai => "ลองทายคำดูสิ!",
            Self::English => "Start guessing!",
        }
    }

    /// Label of the hint action.
    pub fn hint_label(self) -> &'static str {
        match self {
            Self::Thai => "ใบ้คำ",
            Self::English => "Hint",
        }
    }

    /// Label of the give-up action.
    pub fn give_up_label(self) -> &'static str {
        match self {
            Self::Thai => "ยอมแพ้",
            Self::English => "Give Up",
        }
    }

    /// Label of the skip action.
    pub fn skip_label(self) -> &'static str {
        match self {
            Self::Thai => "เปลี่ยนคำ",
            Self::English => "Skip",
        }
    }

    /// Subtitle under the game title.
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Thai => "EMOJI MATCH",
            Self::English => "SEMANTIC GUESS",
        }
    }
}
