//! Scribble Blob runner (default binary).
//!
//! Runs the fixed-step simulation, reads keys with crossterm and draws the
//! scene through the framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use scribble_blob::core::{PerlinNoise, World, WorldSnapshot};
use scribble_blob::input::{should_quit, InputHandler};
use scribble_blob::term::{
    FrameBuffer, ImageAssets, SceneFrame, SceneView, TerminalRenderer, Viewport,
};
use scribble_blob::{logging, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;
    info!(
        asset_dir = %config.asset_dir.display(),
        noise_seed = config.noise_seed,
        tick_ms = config.tick_ms,
        surface = config.surface.as_str(),
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(ok = result.is_ok(), "exiting");
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut world = World::new(config.surface);
    let noise = PerlinNoise::new(config.noise_seed);
    let assets = ImageAssets::load(&config.asset_dir);

    let mut view = SceneView::default();
    let mut input_handler =
        InputHandler::new().with_key_release_events(term.has_key_release_events());
    let mut fb = FrameBuffer::new(0, 0);
    let mut snapshot = WorldSnapshot::default();

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    draw(term, &mut view, &world, &noise, &assets, &mut snapshot, &mut fb)?;

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }
                    input_handler.handle_key(key);
                    // Jumps land before the next update, never mid-frame.
                    for action in input_handler.take_actions() {
                        world.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            input_handler.update();
            world.tick(&input_handler);
            draw(term, &mut view, &world, &noise, &assets, &mut snapshot, &mut fb)?;
        }
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &mut SceneView,
    world: &World,
    noise: &PerlinNoise,
    assets: &ImageAssets,
    snapshot: &mut WorldSnapshot,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    world.snapshot_into(noise, snapshot);
    let frame = SceneFrame {
        platforms: world.platforms(),
        outline: &snapshot.outline,
    };
    view.render_into(&frame, assets, Viewport::new(w, h), fb);
    term.present(fb)
}
