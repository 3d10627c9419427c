//! Static platform layout and the AABB overlap test.

use crate::types::{Rect, CANVAS_HEIGHT, CANVAS_WIDTH, FLOOR_Y};

/// Thickness of the floating steps.
pub const STEP_THICKNESS: f64 = 12.0;

/// Open-interval AABB intersection.
///
/// Rectangles that only share an edge do not overlap, so a blob resting
/// exactly on a platform top is not considered colliding.
#[inline]
pub fn overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Floor plus four steps.
///
/// Order matters only for overlapping platforms, which this layout avoids.
pub fn default_platforms() -> Vec<Rect> {
    vec![
        // floor
        Rect::new(0.0, FLOOR_Y, CANVAS_WIDTH, CANVAS_HEIGHT - FLOOR_Y),
        // low step
        Rect::new(120.0, FLOOR_Y - 130.0, 120.0, STEP_THICKNESS),
        // mid step
        Rect::new(272.0, FLOOR_Y - 230.0, 90.0, STEP_THICKNESS),
        // high step
        Rect::new(390.0, FLOOR_Y - 130.0, 130.0, STEP_THICKNESS),
        // return ramp
        Rect::new(450.0, FLOOR_Y - 300.0, 90.0, STEP_THICKNESS),
    ]
}
