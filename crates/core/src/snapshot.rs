use crate::blob::Polyline;

/// Read-only view of one frame, handed to renderers.
///
/// Refill with `World::snapshot_into` to keep the outline buffers across frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldSnapshot {
    pub frame: u64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub on_ground: bool,
    /// Animation time
    pub t: f64,
    pub outline: Vec<Polyline>,
}

impl WorldSnapshot {
    /// Zero every field. Outline buffers are kept for reuse.
    pub fn clear(&mut self) {
        self.frame = 0;
        self.x = 0.0;
        self.y = 0.0;
        self.vx = 0.0;
        self.vy = 0.0;
        self.on_ground = false;
        self.t = 0.0;
        for line in &mut self.outline {
            line.points.clear();
        }
    }

    pub fn layer_count(&self) -> usize {
        self.outline.len()
    }
}
