//! Key bindings: maps terminal keys to game intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use semantic_guess_core::{Intent, Session};

/// What a key press asks the event loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward an intent to the game.
    Dispatch(Intent),
    /// Leave the game.
    Quit,
}

/// Help line shown under the controls.
pub const HELP: &str = "Enter: Guess | F1: Hint | F2: Give Up | F3: Skip | F4: Language | Esc: Quit";

/// Maps a key press to a command, given the snapshot the player is looking at.
pub fn command_for(key: KeyEvent, session: &Session) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if ctrl => Some(Command::Quit),
        KeyCode::Char('u') if ctrl => edit(session, String::new()),
        KeyCode::F(1) => Some(Command::Dispatch(Intent::RequestHint)),
        KeyCode::F(2) => Some(Command::Dispatch(Intent::GiveUp)),
        KeyCode::F(3) => Some(Command::Dispatch(Intent::StartRound)),
        KeyCode::F(4) => Some(Command::Dispatch(Intent::ToggleLanguage)),
        KeyCode::Enter if session.phase().is_over() => {
            Some(Command::Dispatch(Intent::StartRound))
        }
        KeyCode::Enter => Some(Command::Dispatch(Intent::Submit)),
        KeyCode::Backspace => {
            let mut text = session.input().to_string();
            text.pop()?;
            edit(session, text)
        }
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            let mut text = session.input().to_string();
            text.push(c);
            edit(session, text)
        }
        _ => None,
    }
}

fn edit(session: &Session, text: String) -> Option<Command> {
    session
        .input_enabled()
        .then_some(Command::Dispatch(Intent::EditInput(text)))
}
