//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping).
//!
//! # Scene Dimensions
//!
//! The scene is a fixed square measured in scene units (not terminal cells):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CANVAS_WIDTH` | 670 | Scene width |
//! | `CANVAS_HEIGHT` | 670 | Scene height |
//! | `FLOOR_INSET` | 36 | Floor thickness measured from the bottom edge |
//! | `FLOOR_Y` | 634 | Top edge of the floor, also the blob's reference height |
//! | `TICK_MS` | 16 | Fixed frame interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use scribble_blob_types::{HorizontalIntent, Rect, Surface, FLOOR_Y};
//!
//! let floor = Rect::new(0.0, FLOOR_Y, 670.0, 36.0);
//! assert_eq!(floor.bottom(), 670.0);
//!
//! assert_eq!(HorizontalIntent::from_held(true, false).as_f64(), -1.0);
//! assert_eq!(Surface::from_str("ICE"), Some(Surface::Ice));
//! ```

/// Scene width in scene units
pub const CANVAS_WIDTH: f64 = 670.0;

/// Scene height in scene units
pub const CANVAS_HEIGHT: f64 = 670.0;

/// Floor thickness, measured up from the bottom of the scene
pub const FLOOR_INSET: f64 = 36.0;

/// Top edge of the floor platform
pub const FLOOR_Y: f64 = CANVAS_HEIGHT - FLOOR_INSET;

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// A point in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in scene coordinates.
///
/// `(x, y)` is the top-left corner; y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `2 * radius` centered on `(cx, cy)`.
    pub fn centered(cx: f64, cy: f64, radius: f64) -> Self {
        Self {
            x: cx - radius,
            y: cy - radius,
            w: radius * 2.0,
            h: radius * 2.0,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Horizontal movement intent derived from held keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalIntent {
    Left,
    Right,
    #[default]
    None,
}

impl HorizontalIntent {
    /// Combine held-key state. Holding both directions cancels out.
    pub fn from_held(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, false) => HorizontalIntent::Left,
            (false, true) => HorizontalIntent::Right,
            _ => HorizontalIntent::None,
        }
    }

    /// -1, 0 or +1.
    pub fn as_f64(&self) -> f64 {
        match self {
            HorizontalIntent::Left => -1.0,
            HorizontalIntent::Right => 1.0,
            HorizontalIntent::None => 0.0,
        }
    }
}

/// Discrete, edge-triggered player actions.
///
/// Held movement is not an action; it is polled through [`InputState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Jump (only honored while grounded)
    Jump,
    /// Put the blob back at its start position
    Reset,
}

/// Polled "is this key currently held" queries for horizontal movement.
pub trait InputState {
    fn left_held(&self) -> bool;
    fn right_held(&self) -> bool;

    fn horizontal_intent(&self) -> HorizontalIntent {
        HorizontalIntent::from_held(self.left_held(), self.right_held())
    }
}

/// Fixed input state, useful for scripted frames and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    pub const NONE: HeldKeys = HeldKeys {
        left: false,
        right: false,
    };
    pub const LEFT: HeldKeys = HeldKeys {
        left: true,
        right: false,
    };
    pub const RIGHT: HeldKeys = HeldKeys {
        left: false,
        right: true,
    };
}

impl InputState for HeldKeys {
    fn left_held(&self) -> bool {
        self.left
    }

    fn right_held(&self) -> bool {
        self.right
    }
}

/// Ground material presets.
///
/// Only the ground friction coefficient changes; air friction is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Surface {
    #[default]
    Normal,
    /// Slippery: velocity decays slowly on the ground
    Ice,
    /// Sticky: velocity decays quickly on the ground
    Sand,
}

impl Surface {
    /// Parse surface from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "default" => Some(Surface::Normal),
            "ice" => Some(Surface::Ice),
            "sand" => Some(Surface::Sand),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Surface::Normal => "normal",
            Surface::Ice => "ice",
            Surface::Sand => "sand",
        }
    }

    /// Per-frame velocity multiplier while grounded.
    pub fn ground_friction(&self) -> f64 {
        match self {
            Surface::Normal => 0.88,
            Surface::Ice => 0.95,
            Surface::Sand => 0.80,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_constants() {
        assert_eq!(CANVAS_WIDTH, 670.0);
        assert_eq!(CANVAS_HEIGHT, 670.0);
        assert_eq!(FLOOR_Y, 634.0);
        assert_eq!(TICK_MS, 16);
    }

    #[test]
    fn rect_centered_spans_diameter() {
        let r = Rect::centered(100.0, 50.0, 26.0);
        assert_eq!(r, Rect::new(74.0, 24.0, 52.0, 52.0));
        assert_eq!(r.right(), 126.0);
        assert_eq!(r.bottom(), 76.0);
        assert_eq!(r.center(), Point::new(100.0, 50.0));
    }

    #[test]
    fn opposite_keys_cancel() {
        assert_eq!(HorizontalIntent::from_held(true, true), HorizontalIntent::None);
        assert_eq!(HorizontalIntent::from_held(false, false), HorizontalIntent::None);
        assert_eq!(HeldKeys::RIGHT.horizontal_intent(), HorizontalIntent::Right);
        assert_eq!(HeldKeys::LEFT.horizontal_intent().as_f64(), -1.0);
    }

    #[test]
    fn surface_presets() {
        assert_eq!(Surface::default().ground_friction(), 0.88);
        assert_eq!(Surface::from_str(" sand "), Some(Surface::Sand));
        assert_eq!(Surface::from_str("lava"), None);
        assert!(Surface::Ice.ground_friction() > Surface::Normal.ground_friction());
        assert!(Surface::Sand.ground_friction() < Surface::Normal.ground_friction());
    }
}
