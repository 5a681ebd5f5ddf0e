//! Rendering tests using ratatui's TestBackend.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use semantic_guess::tui::{controls_line, draw, record_line, status_lines};
use semantic_guess_core::{GuessRecord, GuessVerdict, Intent, Language, Outcome, Score, Session};

fn playing(word: &str) -> Session {
    let mut session = Session::new(Language::English);
    let effect = session.apply(Intent::StartRound).expect("start effect");
    session.resolve(Outcome::WordLoaded {
        round: effect.round(),
        word: Some(word.to_string()),
    });
    session
}

fn guess(session: &mut Session, word: &str, verdict: GuessVerdict) {
    session.apply(Intent::EditInput(word.to_string()));
    let effect = session.apply(Intent::Submit).expect("evaluate effect");
    session.resolve(Outcome::GuessEvaluated {
        round: effect.round(),
        guess: word.to_string(),
        verdict,
    });
}

fn buffer_text(buffer: &Buffer) -> String {
    buffer
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect::<String>()
}

fn render(session: &Session) -> String {
    let backend = TestBackend::new(100, 24);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|f| draw(f, session)).expect("draw");
    buffer_text(terminal.backend().buffer())
}

fn line_text(line: &ratatui::text::Line) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

#[test]
fn test_history_renders_guess() {
    let mut session = playing("cat");
    guess(
        &mut session,
        "kitten",
        GuessVerdict::accepted(Score::new(92), "🐱", Some("So close!".to_string())),
    );

    let screen = render(&session);
    assert!(screen.contains("kitten"));
    assert!(screen.contains("92"));
    assert!(screen.contains("SO CLOSE!"));
}

#[test]
fn test_loading_banner() {
    let mut session = Session::new(Language::English);
    session.apply(Intent::StartRound);
    let lines: Vec<String> = status_lines(&session).iter().map(line_text).collect();
    assert!(lines.iter().any(|l| l.contains("Generating Word")));
}

#[test]
fn test_lost_round_shows_answer() {
    let mut session = playing("umbrella");
    session.apply(Intent::GiveUp);

    let screen = render(&session);
    assert!(screen.contains("umbrella"));
    assert!(screen.contains("THE ANSWER!"));
}

#[test]
fn test_invalid_guess_notice() {
    let mut session = playing("cat");
    guess(&mut session, "xyzzy", GuessVerdict::rejected());

    let lines: Vec<String> = status_lines(&session).iter().map(line_text).collect();
    assert!(lines.iter().any(|l| l.contains("⚠️")));
}

#[test]
fn test_record_line_shows_feedback_only_when_latest() {
    let record = GuessRecord::from_verdict(
        "kitten",
        GuessVerdict::accepted(Score::new(92), "🐱", Some("So close!".to_string())),
    )
    .expect("accepted verdict");

    assert!(line_text(&record_line(&record, true)).contains("SO CLOSE!"));
    assert!(!line_text(&record_line(&record, false)).contains("SO CLOSE!"));
}

#[test]
fn test_controls_show_remaining_hints() {
    let mut session = playing("cat");
    assert!(line_text(&controls_line(&session)).contains("(3)"));

    let effect = session.apply(Intent::RequestHint).expect("hint effect");
    session.resolve(Outcome::HintReady {
        round: effect.round(),
        hint: "It purrs.".to_string(),
    });
    assert!(line_text(&controls_line(&session)).contains("(2)"));
}
