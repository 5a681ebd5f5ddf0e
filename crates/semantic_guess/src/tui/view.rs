//! Stateless rendering of a session snapshot.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use semantic_guess_core::{GuessRecord, Language, Phase, Session};
use unicode_width::UnicodeWidthStr;

use super::heat::{heat_bar, heat_color, heat_glyph};
use super::keymap::HELP;

const TITLE: &str = "🔮 ทายคำ ทายใจ";
const BAR_WIDTH: usize = 20;
const WORD_WIDTH: usize = 16;

/// Draws the whole game screen from one snapshot.
pub fn draw(frame: &mut Frame, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Status
            Constraint::Min(4),    // History
            Constraint::Length(3), // Controls
            Constraint::Length(3), // Input
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], session.language());
    draw_status(frame, chunks[1], session);
    draw_history(frame, chunks[2], session);
    draw_controls(frame, chunks[3], session);
    draw_input(frame, chunks[4], session);
}

fn draw_header(frame: &mut Frame, area: Rect, language: Language) {
    let title = Line::from(vec![
        Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(language.subtitle(), Style::default().fg(Color::DarkGray)),
    ]);
    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(language.flag_label()).right_aligned()),
    );
    frame.render_widget(header, area);
}

/// Lines of the status area: phase banner, notice, and latest hint.
pub fn status_lines(session: &Session) -> Vec<Line<'static>> {
    let language = session.language();
    let mut lines = Vec::new();

    match session.phase() {
        Phase::Loading => lines.push(Line::styled(
            "⚡ Generating Word...",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Phase::Won => {
            lines.push(Line::styled(
                language.win_banner(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::raw(format!("Enter: {}", language.play_again_label())));
        }
        Phase::Lost => {
            lines.push(Line::from(vec![
                Span::styled(language.answer_label(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    session.target_word().unwrap_or_default().to_string(),
                    Style::default()
                        .fg(Color::LightMagenta)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ),
            ]));
            lines.push(Line::raw(format!("Enter: {}", language.next_word_label())));
        }
        Phase::Playing => {}
    }

    if let Some(notice) = session.notice() {
        lines.push(Line::styled(
            format!("⚠️ {}", notice.text(language)),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    if session.phase() == Phase::Playing {
        if session.pending_hint() {
            lines.push(Line::styled("💡 ...", Style::default().fg(Color::Yellow)));
        } else if let Some(hint) = session.latest_hint() {
            lines.push(Line::styled(
                format!("💡 {}", hint),
                Style::default().fg(Color::Yellow),
            ));
        }
    }

    lines
}

fn draw_status(frame: &mut Frame, area: Rect, session: &Session) {
    let status = Paragraph::new(status_lines(session))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(status, area);
}

/// One history row: glyph, word, heat bar, temperature glyph and score.
pub fn record_line(record: &GuessRecord, latest: bool) -> Line<'static> {
    let score = *record.score();
    let word_style = if latest {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let pad = WORD_WIDTH.saturating_sub(record.word().width());

    let mut spans = vec![
        Span::raw(format!("{} ", record.emoji())),
        Span::styled(format!("{}{}", record.word(), " ".repeat(pad)), word_style),
        Span::raw(" "),
        Span::styled(heat_bar(score, BAR_WIDTH), Style::default().fg(heat_color(score))),
        Span::raw(format!(" {} {:>3}", heat_glyph(score), score.value())),
    ];
    if latest && let Some(feedback) = record.feedback() {
        spans.push(Span::styled(
            format!("  {}", feedback.to_uppercase()),
            Style::default().fg(Color::LightBlue),
        ));
    }
    Line::from(spans)
}

fn draw_history(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default().borders(Borders::ALL).title("History");

    if session.history().is_empty() {
        let text = if session.phase() == Phase::Playing {
            format!("🧐\n{}", session.language().empty_history_prompt())
        } else {
            String::new()
        };
        let empty = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = session
        .history()
        .iter()
        .enumerate()
        .map(|(index, record)| ListItem::new(record_line(record, index == 0)))
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

/// The action row; unavailable actions are dimmed.
pub fn controls_line(session: &Session) -> Line<'static> {
    let language = session.language();
    let enabled = |on: bool, color: Color| {
        if on {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    Line::from(vec![
        Span::styled(
            format!(
                "F1 💡 {} ({})",
                language.hint_label(),
                session.hints_remaining()
            ),
            enabled(session.can_request_hint(), Color::Yellow),
        ),
        Span::raw("  │  "),
        Span::styled(
            format!("F2 🏳️ {}", language.give_up_label()),
            enabled(session.can_give_up(), Color::LightRed),
        ),
        Span::raw("  │  "),
        Span::styled(
            format!("F3 ⏭️ {}", language.skip_label()),
            enabled(true, Color::LightCyan),
        ),
        Span::raw("  │  "),
        Span::styled(
            format!("F4 {}", language.toggle().flag_label()),
            enabled(true, Color::LightBlue),
        ),
    ])
}

fn draw_controls(frame: &mut Frame, area: Rect, session: &Session) {
    let controls = Paragraph::new(controls_line(session))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title_bottom(Line::from(HELP).centered()),
        );
    frame.render_widget(controls, area);
}

fn draw_input(frame: &mut Frame, area: Rect, session: &Session) {
    let title = if session.pending_submission() {
        "Guess ⏳"
    } else {
        "Guess 🚀"
    };
    let content = if session.input().is_empty() {
        Line::styled(
            session.language().input_placeholder(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Line::raw(session.input().to_string())
    };
    let border = if session.input_enabled() {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    );
    frame.render_widget(input, area);

    if session.input_enabled() {
        let offset = u16::try_from(session.input().width()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(offset)
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
    }
}
