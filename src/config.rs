//! Runtime configuration read from environment variables.
//!
//! Unparsable values fall back to their defaults rather than failing startup.

use std::env;
use std::path::PathBuf;

use crate::types::{Surface, TICK_MS};

pub const ENV_ASSET_DIR: &str = "BLOB_ASSET_DIR";
pub const ENV_NOISE_SEED: &str = "BLOB_NOISE_SEED";
pub const ENV_TICK_MS: &str = "BLOB_TICK_MS";
pub const ENV_SURFACE: &str = "BLOB_SURFACE";
pub const ENV_LOG_PATH: &str = "BLOB_LOG_PATH";

const DEFAULT_ASSET_DIR: &str = "assets";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding `bg.png`, `fg1.png` and `fg2.png`
    pub asset_dir: PathBuf,
    pub noise_seed: u32,
    /// Target frame period
    pub tick_ms: u32,
    pub surface: Surface,
    /// Log file; logging is off when unset
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            noise_seed: 0,
            tick_ms: TICK_MS,
            surface: Surface::Normal,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. `from_env` uses the process
    /// environment; tests pass a closure over fixed values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let asset_dir = non_empty(lookup(ENV_ASSET_DIR))
            .map(PathBuf::from)
            .unwrap_or(defaults.asset_dir);

        let noise_seed = lookup(ENV_NOISE_SEED)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.noise_seed);

        let tick_ms = lookup(ENV_TICK_MS)
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let surface = lookup(ENV_SURFACE)
            .and_then(|s| Surface::from_str(&s))
            .unwrap_or(defaults.surface);

        let log_path = non_empty(lookup(ENV_LOG_PATH)).map(PathBuf::from);

        Self {
            asset_dir,
            noise_seed,
            tick_ms,
            surface,
            log_path,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}
