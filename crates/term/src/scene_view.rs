//! SceneView: maps the simulation and its decorations into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Draw order: backdrop, background image, platforms, blob outline, control
//! hints, narrative text, foreground images.

use crate::assets::{ImageAssets, Sprite};
use crate::core::Polyline;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::layout::{
    cover_rect, foreground_left_rect, foreground_right_rect, wrap_words, CONTROLS_TEXT,
    CONTROLS_Y, NARRATIVE_BOX, NARRATIVE_TEXT,
};
use crate::projection::{Projection, Viewport};
use crate::raster::DotCanvas;
use crate::types::{Rect, CANVAS_HEIGHT, CANVAS_WIDTH};

/// Everything that changes per frame.
#[derive(Debug, Clone, Copy)]
pub struct SceneFrame<'a> {
    pub platforms: &'a [Rect],
    pub outline: &'a [Polyline],
}

/// Colors used by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Outside the scene
    pub margin: Rgb,
    /// Scene fill when there is no background image
    pub backdrop: Rgb,
    pub platform: Rgb,
    pub ink: Rgb,
    pub text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            margin: Rgb::BLACK,
            backdrop: Rgb::new(120, 130, 150),
            platform: Rgb::new(64, 43, 60),
            ink: Rgb::BLACK,
            text: Rgb::WHITE,
        }
    }
}

/// Sprites with less coverage than this leave glyphs beneath them visible.
const GLYPH_COVER_ALPHA: f32 = 0.5;

pub struct SceneView {
    palette: Palette,
    dots: DotCanvas,
    /// Wrapped narrative lines and the width they were wrapped to
    narrative: (usize, Vec<String>),
}

impl Default for SceneView {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl SceneView {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            dots: DotCanvas::default(),
            narrative: (0, Vec::new()),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into(
        &mut self,
        frame: &SceneFrame<'_>,
        assets: &ImageAssets,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> Projection {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle {
                bg: self.palette.margin,
                ..CellStyle::default()
            },
        });

        let proj = Projection::fit(viewport, CANVAS_WIDTH, CANVAS_HEIGHT);
        if proj.is_empty() {
            return proj;
        }

        let scene = proj.scene_span();
        fb.fill_bg(scene.x, scene.y, scene.w, scene.h, self.palette.backdrop);

        if let Some(bg) = &assets.background {
            draw_sprite(fb, &proj, bg, &cover_rect(bg.aspect()));
        }

        for p in frame.platforms {
            if let Some(span) = proj.cell_span(p) {
                fb.fill_bg(span.x, span.y, span.w, span.h, self.palette.platform);
            }
        }

        self.draw_outline(fb, &proj, frame.outline);
        self.draw_controls(fb, &proj);
        self.draw_narrative(fb, &proj);

        if let Some(fg) = &assets.foreground_left {
            draw_sprite(fb, &proj, fg, &foreground_left_rect(fg.aspect()));
        }
        if let Some(fg) = &assets.foreground_right {
            draw_sprite(fb, &proj, fg, &foreground_right_rect(fg.aspect()));
        }

        proj
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &mut self,
        frame: &SceneFrame<'_>,
        assets: &ImageAssets,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, assets, viewport, &mut fb);
        fb
    }

    fn draw_outline(&mut self, fb: &mut FrameBuffer, proj: &Projection, outline: &[Polyline]) {
        self.dots.reset(proj.cols, proj.rows);
        for line in outline {
            for (a, b) in line.segments() {
                self.dots.stroke(proj, a, b);
            }
        }
        self.dots
            .composite(fb, proj.origin_x, proj.origin_y, self.palette.ink);
    }

    fn draw_controls(&self, fb: &mut FrameBuffer, proj: &Projection) {
        let row = proj.row_of(CONTROLS_Y).clamp(0, proj.rows as i32 - 1) as u16;
        let center = proj.origin_x as i32 + proj.cols as i32 / 2;
        put_centered(fb, center, proj.origin_y + row, CONTROLS_TEXT, self.palette.text);
    }

    fn draw_narrative(&mut self, fb: &mut FrameBuffer, proj: &Projection) {
        let width = (NARRATIVE_BOX.w / proj.units_per_col()).floor() as usize;
        if width == 0 {
            return;
        }
        if self.narrative.0 != width {
            self.narrative = (width, wrap_words(NARRATIVE_TEXT, width));
        }
        let center_x = NARRATIVE_BOX.x + NARRATIVE_BOX.w / 2.0;
        let center = proj.origin_x as i32 + proj.col_of(center_x);
        let top = proj.row_of(NARRATIVE_BOX.y);

        for (i, line) in self.narrative.1.iter().enumerate() {
            let row = top + i as i32;
            if row < 0 || row >= proj.rows as i32 {
                break;
            }
            put_centered(fb, center, proj.origin_y + row as u16, line, self.palette.text);
        }
    }
}

fn put_centered(fb: &mut FrameBuffer, center_x: i32, y: u16, text: &str, fg: Rgb) {
    let len = text.chars().count() as i32;
    fb.put_str_over(center_x - len / 2, y, text, fg, false);
}

/// Blend `sprite`, stretched over scene rect `dest`, onto cell backgrounds.
fn draw_sprite(fb: &mut FrameBuffer, proj: &Projection, sprite: &Sprite, dest: &Rect) {
    let Some(span) = proj.cell_span(dest) else {
        return;
    };
    for row in span.y..span.y + span.h {
        for col in span.x..span.x + span.w {
            let center = proj.cell_center(col - proj.origin_x, row - proj.origin_y);
            let u = (center.x - dest.x) / dest.w;
            let v = (center.y - dest.y) / dest.h;
            let Some((color, alpha)) = sprite.sample(u, v) else {
                continue;
            };
            if alpha <= 0.0 {
                continue;
            }
            if let Some(cell) = fb.get_mut(col, row) {
                cell.style.bg = cell.style.bg.blend(color, alpha);
                if alpha >= GLYPH_COVER_ALPHA {
                    cell.ch = ' ';
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_frame() -> SceneFrame<'static> {
        SceneFrame {
            platforms: &[],
            outline: &[],
        }
    }

    #[test]
    fn margin_and_backdrop_are_painted() {
        let mut view = SceneView::default();
        let fb = view.render(&empty_frame(), &ImageAssets::none(), Viewport::new(100, 40));

        // Scene is 80x40 centered: columns 10..90.
        assert_eq!(fb.get(0, 0).unwrap().style.bg, Palette::default().margin);
        assert_eq!(fb.get(10, 0).unwrap().style.bg, Palette::default().backdrop);
        assert_eq!(fb.get(89, 0).unwrap().style.bg, Palette::default().backdrop);
        assert_eq!(fb.get(90, 0).unwrap().style.bg, Palette::default().margin);
    }

    #[test]
    fn tiny_viewport_renders_without_panicking() {
        let mut view = SceneView::default();
        let fb = view.render(&empty_frame(), &ImageAssets::none(), Viewport::new(1, 1));
        assert_eq!(fb.width(), 1);
        let fb = view.render(&empty_frame(), &ImageAssets::none(), Viewport::new(0, 0));
        assert_eq!(fb.cells().len(), 0);
    }

    #[test]
    fn opaque_foreground_hides_glyphs() {
        let mut fb = FrameBuffer::new(80, 40);
        let proj = Projection::fit(Viewport::new(80, 40), CANVAS_WIDTH, CANVAS_HEIGHT);
        fb.put_str_over(0, 30, "xxxx", Rgb::WHITE, false);

        let sprite = Sprite::solid(4, 4, [10, 200, 10, 255]).unwrap();
        draw_sprite(&mut fb, &proj, &sprite, &Rect::new(0.0, 0.0, 670.0, 670.0));

        let cell = fb.get(0, 30).unwrap();
        assert_eq!(cell.ch, ' ');
        assert_eq!(cell.style.bg, Rgb::new(10, 200, 10));
    }

    #[test]
    fn transparent_pixels_leave_cells_untouched() {
        let mut fb = FrameBuffer::new(80, 40);
        let proj = Projection::fit(Viewport::new(80, 40), CANVAS_WIDTH, CANVAS_HEIGHT);
        fb.put_str_over(0, 30, "x", Rgb::WHITE, false);
        let before = fb.get(0, 30).unwrap();

        let sprite = Sprite::solid(4, 4, [10, 200, 10, 0]).unwrap();
        draw_sprite(&mut fb, &proj, &sprite, &Rect::new(0.0, 0.0, 670.0, 670.0));

        assert_eq!(fb.get(0, 30).unwrap(), before);
    }
}
