//! Command-line interface for semantic_guess.

use clap::{Parser, Subcommand};
use semantic_guess_core::Language;

/// Semantic Guess - guess the secret word, scored by a language model
#[derive(Parser, Debug)]
#[command(name = "semantic_guess")]
#[command(about = "Word-guessing game scored by a language model", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game config file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "semantic_guess.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Language of the first round (TH or EN)
        #[arg(short, long)]
        language: Option<Language>,
    },

    /// Print one generated target word
    Word {
        /// Language of the word (TH or EN)
        #[arg(short, long, default_value = "EN")]
        language: Language,
    },

    /// Judge a guess against a target word and print the verdict as JSON
    Judge {
        /// The secret word
        target: String,

        /// The guess to judge
        guess: String,

        /// Language of both words (TH or EN)
        #[arg(short, long, default_value = "EN")]
        language: Language,
    },

    /// Print a hint for a target word
    Hint {
        /// The secret word
        target: String,

        /// Hint level, 1 (vague) to 3 (obvious)
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=3))]
        level: u8,

        /// Language of the hint (TH or EN)
        #[arg(short, long, default_value = "EN")]
        language: Language,
    },
}
