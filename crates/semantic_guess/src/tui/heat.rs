//! Colour, glyph and bar for a similarity score.

use ratatui::style::Color;
use semantic_guess_core::Score;

/// Colour of the bar: red when cold, green when hot.
pub fn heat_color(score: Score) -> Color {
    match score.value() {
        0..20 => Color::Red,
        20..40 => Color::LightRed,
        40..60 => Color::Yellow,
        60..80 => Color::LightGreen,
        _ => Color::Green,
    }
}

/// Temperature glyph shown next to the number.
pub fn heat_glyph(score: Score) -> &'static str {
    match score.value() {
        100 => "🎉",
        81..=99 => "🔥",
        51..=80 => "🤔",
        21..=50 => "❄️",
        _ => "🥶",
    }
}

/// A `width`-cell bar filled in proportion to the score.
pub fn heat_bar(score: Score, width: usize) -> String {
    let filled = (usize::from(score.value()) * width).div_ceil(100).min(width);
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}
