//! Input mapping: terminal keys → game events → state changes.
//!
//! Each event acts exactly once. Holding a key does nothing on its own;
//! only the key-press events the terminal delivers count.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::compute::{move_player_left, move_player_right, player_shoot};
use crate::entities::GameState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    MoveLeft,
    MoveRight,
    Fire,
}

/// Whether the frame loop should keep running after this frame's input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

impl InputEvent {
    /// ← / A move left, → / D move right, Space fires, Q / Esc / Ctrl-C quit.
    /// Repeat and release events are ignored.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Self::Quit)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Self::Quit),
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Self::MoveLeft),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Self::MoveRight),
            KeyCode::Char(' ') => Some(Self::Fire),
            _ => None,
        }
    }
}

/// Apply one frame's events in order. A quit event stops processing at once;
/// the events after it are discarded.
pub fn apply_input(
    state: &mut GameState,
    events: impl IntoIterator<Item = InputEvent>,
) -> Control {
    for event in events {
        match event {
            InputEvent::Quit => return Control::Quit,
            InputEvent::MoveLeft => move_player_left(state),
            InputEvent::MoveRight => move_player_right(state),
            InputEvent::Fire => {
                player_shoot(state);
            }
        }
    }
    Control::Continue
}
