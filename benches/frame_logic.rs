use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scribble_blob::core::{blob_outline_into, PerlinNoise, Polyline, World};
use scribble_blob::term::{FrameBuffer, ImageAssets, SceneFrame, SceneView, Viewport};
use scribble_blob::types::{HeldKeys, PlayerAction};

fn bench_tick(c: &mut Criterion) {
    let mut world = World::default();
    let mut frame = 0u32;

    c.bench_function("world_tick", |b| {
        b.iter(|| {
            frame = frame.wrapping_add(1);
            if frame % 60 == 0 {
                world.apply_action(PlayerAction::Jump);
            }
            let keys = if frame % 240 < 120 {
                HeldKeys::RIGHT
            } else {
                HeldKeys::LEFT
            };
            world.tick(black_box(&keys));
        })
    });
}

fn bench_outline(c: &mut Criterion) {
    let world = World::default();
    let noise = PerlinNoise::new(0);
    let mut out: Vec<Polyline> = Vec::new();

    c.bench_function("blob_outline_15_layers", |b| {
        b.iter(|| {
            blob_outline_into(
                black_box(world.player()),
                world.reference_y(),
                &noise,
                &mut out,
            );
        })
    });

    let mut high = World::default();
    high.player_mut().y = 200.0;
    c.bench_function("blob_outline_high", |b| {
        b.iter(|| {
            blob_outline_into(
                black_box(high.player()),
                high.reference_y(),
                &noise,
                &mut out,
            );
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let world = World::default();
    let outline = world.outline(&PerlinNoise::new(0));
    let assets = ImageAssets::none();
    let mut view = SceneView::default();
    let viewport = Viewport::new(200, 100);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("scene_render_200x100", |b| {
        b.iter(|| {
            let frame = SceneFrame {
                platforms: world.platforms(),
                outline: &outline,
            };
            view.render_into(black_box(&frame), &assets, viewport, &mut fb);
        })
    });
}

criterion_group!(benches, bench_tick, bench_outline, bench_render);
criterion_main!(benches);
