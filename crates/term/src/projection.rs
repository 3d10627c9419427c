//! Scene-to-terminal projection.
//!
//! Terminal cells are roughly twice as tall as they are wide, so the scene is
//! mapped onto a cell rectangle whose column count is twice its row count
//! (times the scene aspect). Each cell also carries a 2x4 braille dot grid,
//! which makes dots square.

use crate::types::{Point, Rect};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Braille dots per cell, horizontally.
pub const DOTS_X: i32 = 2;

/// Braille dots per cell, vertically.
pub const DOTS_Y: i32 = 4;

/// Cell span in absolute viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Top-left cell of the scene
    pub origin_x: u16,
    pub origin_y: u16,
    /// Scene size in cells
    pub cols: u16,
    pub rows: u16,
    units_per_col: f64,
    units_per_row: f64,
}

impl Projection {
    /// Largest centered fit of a `scene_w` x `scene_h` scene into `viewport`.
    pub fn fit(viewport: Viewport, scene_w: f64, scene_h: f64) -> Self {
        let aspect = scene_w / scene_h;
        let by_width = (viewport.width as f64 / (2.0 * aspect)).floor() as u16;
        let rows = viewport.height.min(by_width);
        let cols = ((rows as f64 * 2.0 * aspect).round() as u16).min(viewport.width);

        let (units_per_col, units_per_row) = if cols == 0 || rows == 0 {
            (f64::INFINITY, f64::INFINITY)
        } else {
            (scene_w / cols as f64, scene_h / rows as f64)
        };

        Self {
            origin_x: (viewport.width - cols) / 2,
            origin_y: (viewport.height - rows) / 2,
            cols,
            rows,
            units_per_col,
            units_per_row,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cols == 0 || self.rows == 0
    }

    pub fn units_per_col(&self) -> f64 {
        self.units_per_col
    }

    pub fn units_per_row(&self) -> f64 {
        self.units_per_row
    }

    /// Whole scene as a cell span.
    pub fn scene_span(&self) -> CellSpan {
        CellSpan {
            x: self.origin_x,
            y: self.origin_y,
            w: self.cols,
            h: self.rows,
        }
    }

    /// Scene-local column, unclamped.
    pub fn col_of(&self, x: f64) -> i32 {
        (x / self.units_per_col).floor() as i32
    }

    /// Scene-local row, unclamped.
    pub fn row_of(&self, y: f64) -> i32 {
        (y / self.units_per_row).floor() as i32
    }

    /// Scene-local braille dot, unclamped.
    pub fn dot_of(&self, p: Point) -> (i32, i32) {
        (
            (p.x / self.units_per_col * DOTS_X as f64).floor() as i32,
            (p.y / self.units_per_row * DOTS_Y as f64).floor() as i32,
        )
    }

    /// Center of a scene-local cell, in scene coordinates.
    pub fn cell_center(&self, col: u16, row: u16) -> Point {
        Point::new(
            (col as f64 + 0.5) * self.units_per_col,
            (row as f64 + 0.5) * self.units_per_row,
        )
    }

    /// Every cell `r` touches, clipped to the scene.
    pub fn cell_span(&self, r: &Rect) -> Option<CellSpan> {
        if self.is_empty() {
            return None;
        }
        let x0 = (r.x / self.units_per_col).floor().max(0.0);
        let y0 = (r.y / self.units_per_row).floor().max(0.0);
        let x1 = (r.right() / self.units_per_col).ceil().min(self.cols as f64);
        let y1 = (r.bottom() / self.units_per_row).ceil().min(self.rows as f64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(CellSpan {
            x: self.origin_x + x0 as u16,
            y: self.origin_y + y0 as u16,
            w: (x1 - x0) as u16,
            h: (y1 - y0) as u16,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_scene_is_twice_as_wide_in_cells() {
        let p = Projection::fit(Viewport::new(200, 50), 670.0, 670.0);
        assert_eq!((p.cols, p.rows), (100, 50));
        assert_eq!((p.origin_x, p.origin_y), (50, 0));
    }

    #[test]
    fn narrow_viewport_limits_rows() {
        let p = Projection::fit(Viewport::new(80, 60), 670.0, 670.0);
        assert_eq!((p.cols, p.rows), (80, 40));
        assert_eq!((p.origin_x, p.origin_y), (0, 10));
    }

    #[test]
    fn tiny_viewport_is_empty() {
        let p = Projection::fit(Viewport::new(1, 10), 670.0, 670.0);
        assert!(p.is_empty());
        assert_eq!(p.cell_span(&Rect::new(0.0, 0.0, 10.0, 10.0)), None);
    }

    #[test]
    fn thin_rect_still_covers_a_row() {
        let p = Projection::fit(Viewport::new(80, 40), 670.0, 670.0);
        // 670 / 40 = 16.75 units per row; a 12-unit platform must not vanish.
        let span = p.cell_span(&Rect::new(120.0, 504.0, 120.0, 12.0)).unwrap();
        assert!(span.h >= 1);
        assert!(span.w >= 1);
    }

    #[test]
    fn spans_are_clipped_to_scene() {
        let p = Projection::fit(Viewport::new(80, 40), 670.0, 670.0);
        let span = p.cell_span(&Rect::new(-100.0, 600.0, 2000.0, 500.0)).unwrap();
        assert_eq!(span.x, p.origin_x);
        assert_eq!(span.w, p.cols);
        assert_eq!(span.y + span.h, p.origin_y + p.rows);
    }

    #[test]
    fn dots_are_square() {
        let p = Projection::fit(Viewport::new(80, 40), 670.0, 670.0);
        let dot_w = p.units_per_col() / DOTS_X as f64;
        let dot_h = p.units_per_row() / DOTS_Y as f64;
        assert!((dot_w - dot_h).abs() < 1e-3);
    }
}
