//! Per-frame movement integration and axis-separated collision resolution.
//!
//! Order is fixed: intent, friction/clamp, gravity, X resolution, Y resolution,
//! horizontal canvas clamp. X is resolved completely with the X-shifted box
//! before Y is touched. A platform thinner than one frame's displacement can
//! be tunneled through; that is accepted behavior.

use crate::platform::overlap;
use crate::player::Player;
use crate::types::{HorizontalIntent, Rect};

/// Which sides hit something during a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contacts {
    /// Horizontal movement was stopped by a platform side
    pub wall: bool,
    /// Fell onto a platform top
    pub landed: bool,
    /// Rose into a platform underside
    pub ceiling: bool,
}

/// Steps 1-3: horizontal acceleration, friction, speed clamp and gravity.
pub fn apply_intent(player: &mut Player, intent: HorizontalIntent) {
    let tuning = *player.tuning();

    player.vx += tuning.accel * intent.as_f64();

    player.vx *= if player.on_ground {
        tuning.friction_ground
    } else {
        tuning.friction_air
    };
    player.vx = player.vx.clamp(-tuning.max_run, tuning.max_run);

    // Applied even when grounded; the Y pass cancels it again.
    player.vy += tuning.gravity;
}

/// Shift `bx` by `vx` and push it out of every overlapping platform.
///
/// Returns true if any platform was hit.
pub fn resolve_x(player: &mut Player, bx: &mut Rect, platforms: &[Rect]) -> bool {
    bx.x += player.vx;

    let mut hit = false;
    for s in platforms {
        if overlap(bx, s) {
            if player.vx > 0.0 {
                bx.x = s.x - bx.w;
            } else if player.vx < 0.0 {
                bx.x = s.right();
            }
            player.vx = 0.0;
            hit = true;
        }
    }
    hit
}

/// Shift `bx` by `vy` and snap it to platform tops or undersides.
///
/// Clears `on_ground` first; only a downward hit sets it again.
pub fn resolve_y(player: &mut Player, bx: &mut Rect, platforms: &[Rect]) -> Contacts {
    bx.y += player.vy;
    player.on_ground = false;

    let mut contacts = Contacts::default();
    for s in platforms {
        if overlap(bx, s) {
            if player.vy > 0.0 {
                bx.y = s.y - bx.h;
                player.vy = 0.0;
                player.on_ground = true;
                contacts.landed = true;
            } else if player.vy < 0.0 {
                bx.y = s.bottom();
                player.vy = 0.0;
                contacts.ceiling = true;
            }
        }
    }
    contacts
}

/// Advance one frame of movement (everything except the jump edge).
pub fn step(
    player: &mut Player,
    intent: HorizontalIntent,
    platforms: &[Rect],
    canvas_width: f64,
) -> Contacts {
    apply_intent(player, intent);

    let mut bx = player.collision_box();
    let wall = resolve_x(player, &mut bx, platforms);
    let mut contacts = resolve_y(player, &mut bx, platforms);
    contacts.wall = wall;

    player.set_center_from_box(&bx);

    // No vertical clamp: falling off the bottom is allowed.
    let r = player.radius();
    player.x = player.x.clamp(r, canvas_width - r);

    contacts
}

/// Jump if grounded. Returns whether the jump happened.
///
/// Call once per discrete key press, never per frame.
pub fn try_jump(player: &mut Player) -> bool {
    if !player.on_ground {
        return false;
    }
    player.vy = player.tuning().jump_velocity;
    player.on_ground = false;
    true
}
