//! Log subscriber setup.
//!
//! The terminal UI owns stdout, so logs only go to a file and only when one
//! is configured.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::filter::EnvFilter;

/// Install a file-backed subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `Ok(false)` without installing anything when `path` is `None`.
pub fn init(path: Option<&Path>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_installs_nothing() {
        assert!(!init(None).unwrap());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let err = init(Some(Path::new("/definitely/not/here/blob.log"))).unwrap_err();
        assert!(format!("{err:#}").contains("blob.log"));
    }
}
