//! Held-key tracking for terminal environments.
//!
//! Movement is polled every frame, so the handler keeps a "currently held"
//! view of left/right. Terminals that do not emit key-release events only
//! send presses and auto-repeats; a held key is released after a timeout
//! without a fresh press or repeat. Once a real release event has been seen
//! the timeout is no longer used.
//!
//! Discrete actions (jump, reset) are queued on press and drained once per
//! frame, so each press is applied exactly once.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, movement_key};
use crate::types::{HorizontalIntent, InputState, PlayerAction};

/// Pending action capacity per frame. Extra presses are dropped.
pub const MAX_PENDING_ACTIONS: usize = 8;

// Must exceed the terminal's initial auto-repeat delay, or a held key flickers
// off between the first press and the first repeat.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 550;

#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Last press/repeat time while left is held
    left: Option<Instant>,
    /// Last press/repeat time while right is held
    right: Option<Instant>,
    pending: ArrayVec<PlayerAction, MAX_PENDING_ACTIONS>,
    key_release_timeout: Duration,
    release_events_seen: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            left: None,
            right: None,
            pending: ArrayVec::new(),
            key_release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
            release_events_seen: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout = Duration::from_millis(timeout_ms);
        self
    }

    /// Start with the release timeout off when the terminal is known to
    /// report key releases.
    pub fn with_key_release_events(mut self, reported: bool) -> Self {
        self.release_events_seen = reported;
        self
    }

    pub fn key_release_timeout(&self) -> Duration {
        self.key_release_timeout
    }

    /// Dispatch a crossterm key event by kind.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.kind {
            KeyEventKind::Press => self.handle_key_press(key),
            KeyEventKind::Repeat => self.handle_key_repeat(key.code),
            KeyEventKind::Release => self.handle_key_release(key.code),
        }
    }

    pub fn handle_key_press(&mut self, key: KeyEvent) {
        if let Some(dir) = movement_key(key.code) {
            self.hold(dir);
        }
        if let Some(action) = handle_key_event(key) {
            let _ = self.pending.try_push(action);
        }
    }

    /// Auto-repeat keeps movement held but never re-triggers actions.
    pub fn handle_key_repeat(&mut self, code: KeyCode) {
        if let Some(dir) = movement_key(code) {
            self.hold(dir);
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        self.release_events_seen = true;
        match movement_key(code) {
            Some(HorizontalIntent::Left) => self.left = None,
            Some(HorizontalIntent::Right) => self.right = None,
            _ => {}
        }
    }

    /// Release keys whose press has gone stale. Call once per frame.
    pub fn update(&mut self) {
        if self.release_events_seen {
            return;
        }
        let timeout = self.key_release_timeout;
        let stale = |held: Option<Instant>| held.is_some_and(|at| at.elapsed() > timeout);
        if stale(self.left) {
            self.left = None;
        }
        if stale(self.right) {
            self.right = None;
        }
    }

    /// Drain actions queued since the last call.
    pub fn take_actions(&mut self) -> ArrayVec<PlayerAction, MAX_PENDING_ACTIONS> {
        std::mem::take(&mut self.pending)
    }

    pub fn reset(&mut self) {
        self.left = None;
        self.right = None;
        self.pending.clear();
    }

    fn hold(&mut self, dir: HorizontalIntent) {
        let now = Some(Instant::now());
        match dir {
            HorizontalIntent::Left => self.left = now,
            HorizontalIntent::Right => self.right = now,
            HorizontalIntent::None => {}
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState for InputHandler {
    fn left_held(&self) -> bool {
        self.left.is_some()
    }

    fn right_held(&self) -> bool {
        self.right.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
    }

    #[test]
    fn test_press_and_release_track_held_state() {
        let mut ih = InputHandler::new();

        ih.handle_key(key(KeyCode::Left, KeyEventKind::Press));
        assert!(ih.left_held());
        assert_eq!(ih.horizontal_intent(), HorizontalIntent::Left);

        ih.handle_key(key(KeyCode::Char('d'), KeyEventKind::Press));
        assert_eq!(ih.horizontal_intent(), HorizontalIntent::None);

        ih.handle_key(key(KeyCode::Left, KeyEventKind::Release));
        assert_eq!(ih.horizontal_intent(), HorizontalIntent::Right);
    }

    #[test]
    fn test_jump_press_is_queued_once() {
        let mut ih = InputHandler::new();
        ih.handle_key(key(KeyCode::Char(' '), KeyEventKind::Press));
        ih.handle_key(key(KeyCode::Char(' '), KeyEventKind::Repeat));

        assert_eq!(ih.take_actions().as_slice(), &[PlayerAction::Jump]);
        assert!(ih.take_actions().is_empty());
    }

    #[test]
    fn test_pending_actions_are_capped() {
        let mut ih = InputHandler::new();
        for _ in 0..(MAX_PENDING_ACTIONS + 4) {
            ih.handle_key(key(KeyCode::Up, KeyEventKind::Press));
        }
        assert_eq!(ih.take_actions().len(), MAX_PENDING_ACTIONS);
    }

    #[test]
    fn test_auto_release_triggers_after_timeout_without_key_release_events() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);

        ih.handle_key(key(KeyCode::Right, KeyEventKind::Press));
        assert!(ih.right_held());

        // Simulate no key-release events by moving the last key time into the past.
        ih.right = Some(Instant::now() - Duration::from_millis(51));

        ih.update();
        assert!(!ih.right_held());
    }

    #[test]
    fn test_reported_release_events_disable_timeout_from_the_start() {
        let mut ih = InputHandler::new()
            .with_key_release_timeout_ms(50)
            .with_key_release_events(true);

        ih.handle_key(key(KeyCode::Right, KeyEventKind::Press));
        ih.right = Some(Instant::now() - Duration::from_millis(51));

        ih.update();
        assert!(ih.right_held());
    }

    #[test]
    fn test_repeat_keeps_key_held() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);

        ih.handle_key(key(KeyCode::Right, KeyEventKind::Press));
        ih.right = Some(Instant::now() - Duration::from_millis(51));
        ih.handle_key(key(KeyCode::Right, KeyEventKind::Repeat));

        ih.update();
        assert!(ih.right_held());
    }

    #[test]
    fn test_non_movement_key_does_not_extend_auto_release_timeout() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);

        ih.handle_key(key(KeyCode::Left, KeyEventKind::Press));
        ih.left = Some(Instant::now() - Duration::from_millis(51));
        ih.handle_key(key(KeyCode::Up, KeyEventKind::Press));

        ih.update();
        assert!(!ih.left_held());
    }

    #[test]
    fn test_release_events_disable_timeout() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);

        ih.handle_key(key(KeyCode::Char('x'), KeyEventKind::Release));
        ih.handle_key(key(KeyCode::Left, KeyEventKind::Press));
        ih.left = Some(Instant::now() - Duration::from_millis(500));

        ih.update();
        assert!(ih.left_held());
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        let ih = InputHandler::new();
        assert!(ih.key_release_timeout() > Duration::ZERO);
    }

    #[test]
    fn test_reset_clears_held_state_and_actions() {
        let mut ih = InputHandler::new();
        ih.handle_key(key(KeyCode::Left, KeyEventKind::Press));
        ih.handle_key(key(KeyCode::Char('w'), KeyEventKind::Press));

        ih.reset();
        assert!(!ih.left_held());
        assert!(ih.take_actions().is_empty());
    }
}
