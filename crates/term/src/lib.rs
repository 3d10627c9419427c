//! Terminal rendering for the blob scene.
//!
//! The scene is drawn into a plain framebuffer (no widget toolkit) which is
//! then flushed to the terminal with crossterm. The blob outline is stroked
//! in braille dots so a 26-unit radius still reads as a scribble at typical
//! terminal sizes; platforms and images live on cell backgrounds.
//!
//! Everything except [`renderer`] is pure and unit-testable.

pub mod assets;
pub mod fb;
pub mod layout;
pub mod projection;
pub mod raster;
pub mod renderer;
pub mod scene_view;

pub use scribble_blob_core as core;
pub use scribble_blob_types as types;

pub use assets::{ImageAssets, Sprite};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use projection::{Projection, Viewport};
pub use raster::DotCanvas;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene_view::{Palette, SceneFrame, SceneView};
