//! Scene-space placement of decorations and HUD text.

use crate::types::{Rect, CANVAS_HEIGHT, CANVAS_WIDTH};

/// Control hints, centered along the bottom of the scene.
pub const CONTROLS_TEXT: &str =
    "Move: A/D or ←/→  •  Jump: Space/W/↑  •  Land on Platforms  •  No Prize";

/// Baseline of the control hints.
pub const CONTROLS_Y: f64 = 647.0;

pub const NARRATIVE_TEXT: &str =
    "Retreat behind the trees... or confront your fear and reach the moon";

/// Box the narrative text wraps inside; lines are centered in it.
pub const NARRATIVE_BOX: Rect = Rect::new(CANVAS_WIDTH / 10.0, 185.0, 550.0, 0.0);

/// Foreground decoration height.
pub const FOREGROUND_HEIGHT: f64 = 200.0;

/// Gap between the foreground bottoms and the scene bottom.
pub const FOREGROUND_BOTTOM_MARGIN: f64 = 35.0;

/// Left foreground x (hangs slightly off the left edge).
pub const FOREGROUND_LEFT_X: f64 = -22.0;

/// How far the right foreground hangs off the right edge.
pub const FOREGROUND_RIGHT_OVERHANG: f64 = 10.0;

/// Scale an image of `aspect` (w / h) to cover the whole canvas, centered.
///
/// Wider images fill the height and overflow horizontally; taller ones fill
/// the width and overflow vertically.
pub fn cover_rect(aspect: f64) -> Rect {
    let canvas_aspect = CANVAS_WIDTH / CANVAS_HEIGHT;
    let (w, h) = if aspect > canvas_aspect {
        (CANVAS_HEIGHT * aspect, CANVAS_HEIGHT)
    } else {
        (CANVAS_WIDTH, CANVAS_WIDTH / aspect)
    };
    Rect::new((CANVAS_WIDTH - w) / 2.0, (CANVAS_HEIGHT - h) / 2.0, w, h)
}

fn foreground_y() -> f64 {
    CANVAS_HEIGHT - FOREGROUND_BOTTOM_MARGIN - FOREGROUND_HEIGHT
}

/// Bottom-left decoration placement for an image of `aspect`.
pub fn foreground_left_rect(aspect: f64) -> Rect {
    let w = FOREGROUND_HEIGHT * aspect;
    Rect::new(FOREGROUND_LEFT_X, foreground_y(), w, FOREGROUND_HEIGHT)
}

/// Bottom-right decoration placement for an image of `aspect`.
pub fn foreground_right_rect(aspect: f64) -> Rect {
    let w = FOREGROUND_HEIGHT * aspect;
    Rect::new(
        CANVAS_WIDTH + FOREGROUND_RIGHT_OVERHANG - w,
        foreground_y(),
        w,
        FOREGROUND_HEIGHT,
    )
}

/// Greedy word wrap to at most `width` characters per line.
///
/// Words longer than `width` get a line of their own and are not split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_wide_image_fills_height() {
        let r = cover_rect(2.0);
        assert_eq!(r.h, 670.0);
        assert_eq!(r.w, 1340.0);
        assert_eq!(r.x, -335.0);
        assert_eq!(r.y, 0.0);
    }

    #[test]
    fn cover_tall_image_fills_width() {
        let r = cover_rect(0.5);
        assert_eq!(r.w, 670.0);
        assert_eq!(r.h, 1340.0);
        assert_eq!(r.x, 0.0);
        assert_eq!(r.y, -335.0);
    }

    #[test]
    fn cover_square_image_matches_canvas() {
        assert_eq!(cover_rect(1.0), Rect::new(0.0, 0.0, 670.0, 670.0));
    }

    #[test]
    fn foregrounds_sit_above_bottom_margin() {
        let left = foreground_left_rect(0.5);
        assert_eq!(left, Rect::new(-22.0, 435.0, 100.0, 200.0));

        let right = foreground_right_rect(1.5);
        assert_eq!(right, Rect::new(380.0, 435.0, 300.0, 200.0));
        assert_eq!(right.right(), 680.0);
        assert_eq!(right.bottom(), 635.0);
    }

    #[test]
    fn wrap_keeps_words_whole() {
        let lines = wrap_words("aa bb cc dddddd e", 5);
        assert_eq!(lines, vec!["aa bb", "cc", "dddddd", "e"]);
    }

    #[test]
    fn wrap_fits_narrative_on_one_line_when_wide() {
        let lines = wrap_words(NARRATIVE_TEXT, 200);
        assert_eq!(lines, vec![NARRATIVE_TEXT.to_string()]);
    }
}
