use std::path::Path;

use scribble_blob::core::{PerlinNoise, World};
use scribble_blob::term::layout::CONTROLS_TEXT;
use scribble_blob::term::{FrameBuffer, ImageAssets, Palette, SceneFrame, SceneView, Viewport};
use scribble_blob::types::HeldKeys;

fn render_world(world: &World, viewport: Viewport) -> FrameBuffer {
    let outline = world.outline(&PerlinNoise::new(0));
    let frame = SceneFrame {
        platforms: world.platforms(),
        outline: &outline,
    };
    let assets = ImageAssets::load(Path::new("no-such-asset-dir"));
    SceneView::default().render(&frame, &assets, viewport)
}

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_braille(ch: char) -> bool {
    ('\u{2801}'..='\u{28FF}').contains(&ch)
}

#[test]
fn controls_hint_is_drawn() {
    let fb = render_world(&World::default(), Viewport::new(200, 100));
    assert!(all_text(&fb).contains(CONTROLS_TEXT));
}

#[test]
fn narrative_is_drawn() {
    let fb = render_world(&World::default(), Viewport::new(200, 100));
    let text = all_text(&fb);
    assert!(text.contains("Retreat behind the trees"));
    assert!(text.contains("moon"));
}

#[test]
fn blob_is_stroked_near_its_center() {
    let mut world = World::default();
    for _ in 0..5 {
        world.tick(&HeldKeys::NONE);
    }
    // 200x100 projects 670 units onto 200 columns: 3.35 units/col, 6.7 units/row.
    let fb = render_world(&world, Viewport::new(200, 100));
    let p = world.player();
    let col = (p.x / 3.35) as u16;
    let row = (p.y / 6.7) as u16;

    let mut hits = 0;
    for y in row.saturating_sub(6)..row + 6 {
        for x in col.saturating_sub(12)..col + 12 {
            if fb.get(x, y).is_some_and(|c| is_braille(c.ch)) {
                hits += 1;
            }
        }
    }
    assert!(hits > 10, "only {hits} braille cells near the blob");
}

#[test]
fn floor_uses_platform_color() {
    let fb = render_world(&World::default(), Viewport::new(200, 100));
    // Floor spans 634..670: the last scene rows.
    let cell = fb.get(100, 99).unwrap();
    assert_eq!(cell.style.bg, Palette::default().platform);
}

#[test]
fn missing_assets_do_not_panic_at_any_size() {
    let world = World::default();
    for (w, h) in [(0, 0), (1, 1), (3, 80), (80, 3), (80, 24), (300, 90)] {
        let fb = render_world(&world, Viewport::new(w, h));
        assert_eq!(fb.width(), w);
        assert_eq!(fb.height(), h);
    }
}
