//! Player state: the blob's position, velocity, tuning and outline shape.

use crate::types::{Rect, Surface, FLOOR_Y};

/// Movement tuning constants, fixed after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerTuning {
    /// Horizontal acceleration per frame while a direction is held
    pub accel: f64,
    /// Maximum horizontal speed (scene units per frame)
    pub max_run: f64,
    /// Downward acceleration per frame
    pub gravity: f64,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_velocity: f64,
    /// Horizontal velocity multiplier while airborne
    pub friction_air: f64,
    /// Horizontal velocity multiplier while grounded
    pub friction_ground: f64,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            accel: 0.55,
            max_run: 4.0,
            gravity: 0.65,
            jump_velocity: -13.75,
            friction_air: 0.995,
            friction_ground: Surface::Normal.ground_friction(),
        }
    }
}

impl PlayerTuning {
    pub fn for_surface(surface: Surface) -> Self {
        Self {
            friction_ground: surface.ground_friction(),
            ..Self::default()
        }
    }
}

/// Outline shape parameters, fixed after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlobShape {
    /// Base radius; also half the collision box side
    pub radius: f64,
    /// Vertices per outline layer
    pub points: usize,
    /// Maximum edge deformation from the coherent noise
    pub wobble: f64,
    /// Sampling radius on the noise field (lower is smoother)
    pub wobble_freq: f64,
}

impl Default for BlobShape {
    fn default() -> Self {
        Self {
            radius: 26.0,
            points: 48,
            wobble: 7.0,
            wobble_freq: 0.9,
        }
    }
}

/// The player-controlled blob.
///
/// Position, velocity, grounded flag and animation time change every frame.
/// Tuning and shape are private so they stay constant for the blob's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Center x
    pub x: f64,
    /// Center y
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// True while resting on top of a platform
    pub on_ground: bool,
    /// Animation time accumulator
    pub t: f64,
    t_speed: f64,
    tuning: PlayerTuning,
    shape: BlobShape,
}

/// Default spawn x.
pub const SPAWN_X: f64 = 80.0;

/// Animation time advanced per frame.
pub const DEFAULT_TIME_STEP: f64 = 0.01;

impl Player {
    pub fn new(x: f64, y: f64, tuning: PlayerTuning, shape: BlobShape) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            on_ground: false,
            t: 0.0,
            t_speed: DEFAULT_TIME_STEP,
            tuning,
            shape,
        }
    }

    /// Blob at the default spawn point, one unit above the floor.
    pub fn spawn(surface: Surface) -> Self {
        let shape = BlobShape::default();
        Self::new(
            SPAWN_X,
            FLOOR_Y - shape.radius - 1.0,
            PlayerTuning::for_surface(surface),
            shape,
        )
    }

    pub fn tuning(&self) -> &PlayerTuning {
        &self.tuning
    }

    pub fn shape(&self) -> &BlobShape {
        &self.shape
    }

    pub fn radius(&self) -> f64 {
        self.shape.radius
    }

    pub fn time_step(&self) -> f64 {
        self.t_speed
    }

    /// Collision square around the center. Recomputed on demand, never stored.
    pub fn collision_box(&self) -> Rect {
        Rect::centered(self.x, self.y, self.shape.radius)
    }

    /// Move the center to the middle of `bx`.
    pub fn set_center_from_box(&mut self, bx: &Rect) {
        let c = bx.center();
        self.x = c.x;
        self.y = c.y;
    }
}
