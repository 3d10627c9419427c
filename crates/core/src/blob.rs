//! Procedural "scribble" outline of the blob.
//!
//! Each frame the outline is regenerated from scratch from the player's
//! center, shape and animation time. Nothing is retained between frames.
//!
//! Per layer `l` and vertex angle `a`:
//!
//! ```text
//! n      = noise3(cos(a)·freq + 100, sin(a)·freq + 100, t + 0.3·l)   in [0, 1]
//! jitter = noise2(2t + l, 3a) · 6
//! shrink = (l / 4) · 8
//! r      = radius + lerp(-wobble, wobble, n) + jitter - shrink
//! ```
//!
//! The number of layers grows by 6 for every 50 units the blob has climbed
//! above the reference height.

use std::f64::consts::TAU;

use crate::noise::NoiseSource;
use crate::player::Player;
use crate::types::Point;

/// Layers drawn at or below the reference height.
pub const BASE_LAYERS: usize = 15;

/// Extra layers added per climbed step.
pub const LAYERS_PER_STEP: usize = 6;

/// Height of one climbed step.
pub const LAYER_STEP_HEIGHT: f64 = 50.0;

/// Noise-time offset between consecutive layers.
pub const LAYER_TIME_OFFSET: f64 = 0.3;

/// Keeps the wobble samples away from the noise origin.
pub const NOISE_OFFSET: f64 = 100.0;

/// Amplitude of the high-frequency tremor.
pub const JITTER_AMPLITUDE: f64 = 6.0;

/// Radius lost per layer.
pub const SHRINK_PER_LAYER: f64 = 8.0 / 4.0;

/// Closed polyline; the last point connects back to the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    /// Segments including the closing one.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

/// Number of outline layers for a blob centered at `player_y`.
///
/// Only height above `reference_y` counts; anything below is treated as zero.
pub fn layer_count(player_y: f64, reference_y: f64) -> usize {
    let climbed = (reference_y - player_y).max(0.0);
    BASE_LAYERS + (climbed / LAYER_STEP_HEIGHT).floor() as usize * LAYERS_PER_STEP
}

/// Generate all layers for this frame.
pub fn blob_outline<N: NoiseSource + ?Sized>(
    player: &Player,
    reference_y: f64,
    noise: &N,
) -> Vec<Polyline> {
    let mut out = Vec::new();
    blob_outline_into(player, reference_y, noise, &mut out);
    out
}

/// Generate all layers into `out`, reusing its allocations.
pub fn blob_outline_into<N: NoiseSource + ?Sized>(
    player: &Player,
    reference_y: f64,
    noise: &N,
    out: &mut Vec<Polyline>,
) {
    let shape = *player.shape();
    let layers = layer_count(player.y, reference_y);
    let points = shape.points;

    let (cx, cy, t) = (player.x, player.y, player.t);
    let base_r = shape.radius;
    let wobble = shape.wobble;
    let freq = shape.wobble_freq;

    out.resize_with(layers, Polyline::default);
    for (layer, line) in out.iter_mut().enumerate() {
        line.points.clear();
        line.points.reserve(points);

        let l = layer as f64;
        let shrink = l * SHRINK_PER_LAYER;

        for i in 0..points {
            let a = i as f64 / points as f64 * TAU;
            let (sin_a, cos_a) = a.sin_cos();

            let n = noise.noise3(
                cos_a * freq + NOISE_OFFSET,
                sin_a * freq + NOISE_OFFSET,
                t + l * LAYER_TIME_OFFSET,
            );
            let jitter = noise.noise2(t * 2.0 + l, a * 3.0) * JITTER_AMPLITUDE;

            let r = base_r + (-wobble + n * 2.0 * wobble) + jitter - shrink;
            line.points.push(Point::new(
                cx + cos_a * r,
                cy + sin_a * r,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{FlatNoise, PerlinNoise};
    use crate::player::{BlobShape, PlayerTuning};

    fn player_at(x: f64, y: f64) -> Player {
        Player::new(x, y, PlayerTuning::default(), BlobShape::default())
    }

    #[test]
    fn layer_count_steps_every_fifty_units() {
        assert_eq!(layer_count(634.0, 634.0), 15);
        assert_eq!(layer_count(634.0 - 49.0, 634.0), 15);
        assert_eq!(layer_count(634.0 - 50.0, 634.0), 21);
        assert_eq!(layer_count(634.0 - 100.0, 634.0), 27);
    }

    #[test]
    fn layer_count_ignores_depth_below_reference() {
        assert_eq!(layer_count(900.0, 634.0), 15);
    }

    #[test]
    fn outline_has_one_polyline_per_layer() {
        let p = player_at(300.0, 534.0);
        let lines = blob_outline(&p, 634.0, &PerlinNoise::new(1));
        assert_eq!(lines.len(), 27);
        assert!(lines.iter().all(|l| l.points.len() == 48));
    }

    #[test]
    fn flat_noise_yields_shrinking_circles() {
        let p = player_at(100.0, 200.0);
        // n = 0.5 cancels the wobble; jitter = 0.5 * 6 = 3.
        let lines = blob_outline(&p, 200.0, &FlatNoise(0.5));

        for (layer, line) in lines.iter().enumerate() {
            let expected = 26.0 + 3.0 - layer as f64 * 2.0;
            for pt in &line.points {
                let d = ((pt.x - 100.0).powi(2) + (pt.y - 200.0).powi(2)).sqrt();
                assert!((d - expected.abs()).abs() < 1e-3, "layer {} d={}", layer, d);
            }
        }
    }

    #[test]
    fn first_vertex_points_along_positive_x() {
        let p = player_at(100.0, 200.0);
        let lines = blob_outline(&p, 200.0, &FlatNoise(0.0));
        // n = 0 -> -wobble; jitter 0; layer 0 has no shrink.
        let first = lines[0].points[0];
        assert!((first.x - (100.0 + 26.0 - 7.0)).abs() < 1e-4);
        assert!((first.y - 200.0).abs() < 1e-4);
    }

    #[test]
    fn outline_is_deterministic_for_equal_inputs() {
        let mut p = player_at(321.0, 480.0);
        p.t = 1.25;
        let a = blob_outline(&p, 634.0, &PerlinNoise::new(9));
        let b = blob_outline(&p, 634.0, &PerlinNoise::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn outline_changes_over_time() {
        let mut p = player_at(321.0, 480.0);
        let noise = PerlinNoise::new(9);
        p.t = 0.37;
        let a = blob_outline(&p, 634.0, &noise);
        p.t = 0.87;
        let b = blob_outline(&p, 634.0, &noise);
        assert_ne!(a, b);
    }

    #[test]
    fn into_variant_reuses_buffer_and_shrinks_layer_count() {
        let noise = PerlinNoise::new(2);
        let mut out = Vec::new();

        blob_outline_into(&player_at(300.0, 400.0), 634.0, &noise, &mut out);
        assert_eq!(out.len(), layer_count(400.0, 634.0));

        blob_outline_into(&player_at(300.0, 634.0), 634.0, &noise, &mut out);
        assert_eq!(out.len(), 15);
        assert_eq!(out, blob_outline(&player_at(300.0, 634.0), 634.0, &noise));
    }

    #[test]
    fn segments_close_the_loop() {
        let line = Polyline {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
            ],
        };
        let segs: Vec<_> = line.segments().collect();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[2], (Point::new(1.0, 1.0), Point::new(0.0, 0.0)));
        assert_eq!(Polyline::default().segments().count(), 0);
    }
}
