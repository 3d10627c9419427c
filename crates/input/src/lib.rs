//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into held movement state and discrete
//! [`crate::types::PlayerAction`]s, and tracks held keys in terminals that
//! never emit key-release events.

pub mod handler;
pub mod map;

pub use scribble_blob_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, movement_key, should_quit};
