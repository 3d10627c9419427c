//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the blob's movement rules, the platform collision
//! resolver and the procedural outline generator. It has **no dependencies**
//! on terminals or input devices, making it:
//!
//! - **Deterministic**: same inputs and noise seed produce identical frames
//! - **Testable**: scripted input sequences run without a render surface
//! - **Portable**: the outline is plain geometry any backend can stroke
//!
//! # Module Structure
//!
//! - [`player`]: blob state, movement tuning and outline shape
//! - [`platform`]: the static platform layout and the AABB overlap test
//! - [`physics`]: per-frame integration with axis-separated collision resolution
//! - [`noise`]: coherent noise sources normalized to `[0, 1]`
//! - [`blob`]: the layered "scribble" outline generator
//! - [`world`]: the simulation state tying it all together
//! - [`snapshot`]: per-frame copy of what renderers need
//!
//! # Frame Order
//!
//! 1. Horizontal intent adds acceleration
//! 2. Ground or air friction, then speed clamp
//! 3. Gravity (always)
//! 4. Resolve X against every platform, then Y
//! 5. Clamp x to the canvas (never y)
//! 6. Advance animation time
//!
//! Jumping is not part of the frame: it is applied once per key press via
//! [`World::jump`](world::World::jump).
//!
//! # Example
//!
//! ```
//! use scribble_blob_core::{PerlinNoise, World};
//! use scribble_blob_types::{HeldKeys, PlayerAction};
//!
//! let mut world = World::default();
//! for _ in 0..5 {
//!     world.tick(&HeldKeys::RIGHT);
//! }
//! assert!(world.player().on_ground);
//! assert!(world.apply_action(PlayerAction::Jump));
//!
//! let outline = world.outline(&PerlinNoise::new(0));
//! assert_eq!(outline.len(), world.layer_count());
//! ```

pub mod blob;
pub mod noise;
pub mod physics;
pub mod platform;
pub mod player;
pub mod snapshot;
pub mod world;

pub use scribble_blob_types as types;

// Re-export commonly used types for convenience
pub use blob::{blob_outline, blob_outline_into, layer_count, Polyline};
pub use self::noise::{FlatNoise, NoiseSource, PerlinNoise};
pub use physics::{step, try_jump, Contacts};
pub use platform::{default_platforms, overlap};
pub use player::{BlobShape, Player, PlayerTuning};
pub use snapshot::WorldSnapshot;
pub use world::World;
