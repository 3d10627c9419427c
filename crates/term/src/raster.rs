//! Braille dot canvas for stroking polylines at sub-cell resolution.

use crate::fb::{FrameBuffer, Rgb};
use crate::projection::{Projection, DOTS_X, DOTS_Y};
use crate::types::Point;

const BRAILLE_BASE: u32 = 0x2800;

// Bit for dot (x, y) within a cell, per the Unicode braille layout.
const DOT_BITS: [[u8; 4]; 2] = [[0x01, 0x02, 0x04, 0x40], [0x08, 0x10, 0x20, 0x80]];

/// Dot mask per cell, sized to the projected scene.
#[derive(Debug, Clone, Default)]
pub struct DotCanvas {
    cols: u16,
    rows: u16,
    bits: Vec<u8>,
}

impl DotCanvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        let mut canvas = Self::default();
        canvas.reset(cols, rows);
        canvas
    }

    /// Resize and clear every dot.
    pub fn reset(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.bits.clear();
        self.bits.resize((cols as usize) * (rows as usize), 0);
    }

    /// Set a dot in scene-local dot coordinates. Out of range is ignored.
    pub fn set_dot(&mut self, dx: i32, dy: i32) {
        if dx < 0 || dy < 0 {
            return;
        }
        let (col, row) = (dx / DOTS_X, dy / DOTS_Y);
        if col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        let i = (row as usize) * (self.cols as usize) + col as usize;
        self.bits[i] |= DOT_BITS[(dx % DOTS_X) as usize][(dy % DOTS_Y) as usize];
    }

    pub fn mask(&self, col: u16, row: u16) -> u8 {
        if col >= self.cols || row >= self.rows {
            return 0;
        }
        self.bits[(row as usize) * (self.cols as usize) + col as usize]
    }

    /// Bresenham line between two dots, endpoints included.
    pub fn line(&mut self, from: (i32, i32), to: (i32, i32)) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_dot(x, y);
            if x == to.0 && y == to.1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Stroke a scene-space segment.
    pub fn stroke(&mut self, proj: &Projection, a: Point, b: Point) {
        let from = proj.dot_of(a);
        let to = proj.dot_of(b);
        // Far off-scene segments (a blob falling forever) would only burn time.
        let limit = (self.cols.max(self.rows) as i32 + 1) * DOTS_Y * 4;
        if from.0.abs().max(from.1.abs()) > limit || to.0.abs().max(to.1.abs()) > limit {
            return;
        }
        self.line(from, to);
    }

    /// Write every non-empty cell as a braille glyph, keeping backgrounds.
    pub fn composite(&self, fb: &mut FrameBuffer, origin_x: u16, origin_y: u16, ink: Rgb) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let m = self.mask(col, row);
                if m == 0 {
                    continue;
                }
                let ch = char::from_u32(BRAILLE_BASE + m as u32).unwrap_or('⣿');
                fb.put_char_over(origin_x + col, origin_y + row, ch, ink, false);
            }
        }
    }
}
