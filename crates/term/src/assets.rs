//! Background and foreground images.
//!
//! Images are decoded once at startup. A missing or broken file is logged and
//! left as `None`; the view skips absent images.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::fb::Rgb;

pub const BACKGROUND_FILE: &str = "bg.png";
pub const FOREGROUND_LEFT_FILE: &str = "fg1.png";
pub const FOREGROUND_RIGHT_FILE: &str = "fg2.png";

/// Decoded RGBA image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u32,
    height: u32,
    rgba: Vec<[u8; 4]>,
}

impl Sprite {
    /// Build from row-major RGBA pixels. Returns `None` on size mismatch or
    /// zero dimensions.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<[u8; 4]>) -> Option<Self> {
        if width == 0 || height == 0 || rgba.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            rgba,
        })
    }

    /// Single-color sprite.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Option<Self> {
        Self::from_rgba(width, height, vec![rgba; (width as usize) * (height as usize)])
    }

    pub fn load(path: &Path) -> Result<Self> {
        let img = image::open(path)
            .with_context(|| format!("failed to decode {}", path.display()))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        let rgba = img.pixels().map(|p| p.0).collect();
        Self::from_rgba(width, height, rgba)
            .with_context(|| format!("empty image {}", path.display()))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Nearest-neighbor sample at normalized `(u, v)`; `None` outside `[0, 1)`.
    pub fn sample(&self, u: f64, v: f64) -> Option<(Rgb, f32)> {
        if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
            return None;
        }
        let x = ((u * self.width as f64) as u32).min(self.width - 1);
        let y = ((v * self.height as f64) as u32).min(self.height - 1);
        let [r, g, b, a] = self.rgba[(y as usize) * (self.width as usize) + x as usize];
        Some((Rgb::new(r, g, b), a as f32 / 255.0))
    }
}

/// The three decoration images; any of them may be absent.
#[derive(Debug, Clone, Default)]
pub struct ImageAssets {
    pub background: Option<Sprite>,
    pub foreground_left: Option<Sprite>,
    pub foreground_right: Option<Sprite>,
}

impl ImageAssets {
    /// No images at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Load all three images from `dir`, tolerating failures.
    pub fn load(dir: &Path) -> Self {
        let assets = Self {
            background: load_optional(dir.join(BACKGROUND_FILE)),
            foreground_left: load_optional(dir.join(FOREGROUND_LEFT_FILE)),
            foreground_right: load_optional(dir.join(FOREGROUND_RIGHT_FILE)),
        };
        info!(
            dir = %dir.display(),
            background = assets.background.is_some(),
            foreground_left = assets.foreground_left.is_some(),
            foreground_right = assets.foreground_right.is_some(),
            "image assets loaded"
        );
        assets
    }
}

fn load_optional(path: PathBuf) -> Option<Sprite> {
    match Sprite::load(&path) {
        Ok(sprite) => Some(sprite),
        Err(e) => {
            warn!(path = %path.display(), error = %format!("{:#}", e), "image asset unavailable");
            None
        }
    }
}
