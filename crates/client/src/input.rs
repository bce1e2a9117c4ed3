//! Keyboard bindings for the scoreboard.
//!
//! This module owns the key-to-command mapping so the rest of the client never
//! looks at `crossterm` key codes.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use padel_core::{ScoreAction, Team};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Append a snapshot through the engine.
    Score(ScoreAction),
    /// Drop the latest snapshot.
    Undo,
    /// Exit the application.
    Quit,
    /// No meaningful command was produced.
    None,
}

/// Converts a raw key event into a higher-level command.
pub fn handle_key(key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Quit,
            _ => KeyAction::None,
        };
    }

    match key.code {
        KeyCode::Char(ch) => handle_char(ch),
        KeyCode::Left => KeyAction::Score(ScoreAction::Point(Team::A)),
        KeyCode::Right => KeyAction::Score(ScoreAction::Point(Team::B)),
        KeyCode::Backspace => KeyAction::Undo,
        KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

fn handle_char(raw: char) -> KeyAction {
    match raw.to_ascii_lowercase() {
        'a' => KeyAction::Score(ScoreAction::Point(Team::A)),
        'b' => KeyAction::Score(ScoreAction::Point(Team::B)),
        'f' => KeyAction::Score(ScoreAction::FlipSide),
        't' => KeyAction::Score(ScoreAction::SwitchTeam),
        'p' => KeyAction::Score(ScoreAction::SwitchPlayer),
        'u' => KeyAction::Undo,
        'q' => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

/// Footer help text, kept next to the bindings it describes.
pub const KEY_HELP: &str =
    "a/← point A  b/→ point B  u/⌫ undo  f flip side  t switch team  p switch player  q quit";
