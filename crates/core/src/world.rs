//! World - complete simulation state for one blob and its platforms.
//!
//! The world owns the player and the static platform list. It has no I/O:
//! callers feed it polled input each frame and discrete actions as they
//! arrive, then ask it for the outline to draw.

use tracing::debug;

use crate::blob::{blob_outline_into, Polyline};
use crate::noise::NoiseSource;
use crate::physics::{step, try_jump, Contacts};
use crate::platform::default_platforms;
use crate::player::Player;
use crate::snapshot::WorldSnapshot;
use crate::types::{InputState, PlayerAction, Rect, Surface, CANVAS_WIDTH, FLOOR_Y};

#[derive(Debug, Clone)]
pub struct World {
    player: Player,
    spawn: Player,
    platforms: Vec<Rect>,
    canvas_width: f64,
    reference_y: f64,
    frame: u64,
}

impl World {
    /// Default layout: floor plus four steps, blob at the spawn point.
    pub fn new(surface: Surface) -> Self {
        Self::with_layout(
            Player::spawn(surface),
            default_platforms(),
            CANVAS_WIDTH,
            FLOOR_Y,
        )
    }

    /// Custom layout. `reference_y` is the height layer growth is measured from.
    pub fn with_layout(
        player: Player,
        platforms: Vec<Rect>,
        canvas_width: f64,
        reference_y: f64,
    ) -> Self {
        Self {
            spawn: player.clone(),
            player,
            platforms,
            canvas_width,
            reference_y,
            frame: 0,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Direct access for scripted setups. Tuning and shape stay private.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn platforms(&self) -> &[Rect] {
        &self.platforms
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn reference_y(&self) -> f64 {
        self.reference_y
    }

    /// Frames simulated since creation or the last reset.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance one frame: movement, collisions, clamp, then animation time.
    pub fn tick<I: InputState + ?Sized>(&mut self, input: &I) -> Contacts {
        let was_grounded = self.player.on_ground;
        let contacts = step(
            &mut self.player,
            input.horizontal_intent(),
            &self.platforms,
            self.canvas_width,
        );
        self.player.t += self.player.time_step();
        self.frame += 1;

        if contacts.landed && !was_grounded {
            debug!(
                frame = self.frame,
                x = self.player.x,
                y = self.player.y,
                "blob landed"
            );
        }
        contacts
    }

    /// Edge-triggered jump. Returns whether it happened.
    pub fn jump(&mut self) -> bool {
        let jumped = try_jump(&mut self.player);
        if jumped {
            debug!(frame = self.frame, x = self.player.x, "blob jumped");
        }
        jumped
    }

    /// Put the blob back where it started. Animation time keeps running.
    pub fn reset(&mut self) {
        let t = self.player.t;
        self.player = self.spawn.clone();
        self.player.t = t;
        self.frame = 0;
        debug!("world reset");
    }

    /// Apply a discrete action. Returns whether it changed the world.
    pub fn apply_action(&mut self, action: PlayerAction) -> bool {
        match action {
            PlayerAction::Jump => self.jump(),
            PlayerAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Layers the blob needs this frame.
    pub fn layer_count(&self) -> usize {
        crate::blob::layer_count(self.player.y, self.reference_y)
    }

    /// Write this frame's outline into `out`, reusing its allocations.
    pub fn outline_into<N: NoiseSource + ?Sized>(&self, noise: &N, out: &mut Vec<Polyline>) {
        blob_outline_into(&self.player, self.reference_y, noise, out);
    }

    pub fn outline<N: NoiseSource + ?Sized>(&self, noise: &N) -> Vec<Polyline> {
        let mut out = Vec::new();
        self.outline_into(noise, &mut out);
        out
    }

    /// Copy this frame's drawable state into `out`, reusing its outline buffers.
    pub fn snapshot_into<N: NoiseSource + ?Sized>(&self, noise: &N, out: &mut WorldSnapshot) {
        let p = &self.player;
        out.frame = self.frame;
        out.x = p.x;
        out.y = p.y;
        out.vx = p.vx;
        out.vy = p.vy;
        out.on_ground = p.on_ground;
        out.t = p.t;
        self.outline_into(noise, &mut out.outline);
    }

    pub fn snapshot<N: NoiseSource + ?Sized>(&self, noise: &N) -> WorldSnapshot {
        let mut s = WorldSnapshot::default();
        self.snapshot_into(noise, &mut s);
        s
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(Surface::Normal)
    }
}
