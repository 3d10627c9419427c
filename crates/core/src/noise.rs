//! Coherent noise sources for the blob outline.
//!
//! Values are normalized to `[0, 1]` so the outline math does not depend on
//! the backing generator's native range.

use ::noise::{NoiseFn, Perlin};

/// Deterministic smooth noise in `[0, 1]`.
pub trait NoiseSource {
    fn noise2(&self, x: f64, y: f64) -> f64;
    fn noise3(&self, x: f64, y: f64, z: f64) -> f64;
}

/// Perlin noise from the `noise` crate.
#[derive(Debug, Clone)]
pub struct PerlinNoise {
    perlin: Perlin,
}

impl PerlinNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

#[inline]
fn to_unit(v: f64) -> f64 {
    ((v + 1.0) * 0.5).clamp(0.0, 1.0)
}

impl NoiseSource for PerlinNoise {
    fn noise2(&self, x: f64, y: f64) -> f64 {
        to_unit(self.perlin.get([x, y]))
    }

    fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        to_unit(self.perlin.get([x, y, z]))
    }
}

/// Returns the same value everywhere. Makes outlines exact circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatNoise(pub f64);

impl NoiseSource for FlatNoise {
    fn noise2(&self, _x: f64, _y: f64) -> f64 {
        self.0
    }

    fn noise3(&self, _x: f64, _y: f64, _z: f64) -> f64 {
        self.0
    }
}
