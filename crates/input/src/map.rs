//! Key mapping from terminal events to player input.

use crate::types::{HorizontalIntent, PlayerAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to discrete actions.
pub fn handle_key_event(key: KeyEvent) -> Option<PlayerAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char(' ') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(PlayerAction::Jump)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(PlayerAction::Reset),
        _ => None,
    }
}

/// Map keyboard input to a held movement direction.
pub fn movement_key(code: KeyCode) -> Option<HorizontalIntent> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(HorizontalIntent::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(HorizontalIntent::Right),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
