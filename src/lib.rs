//! Scribble Blob (workspace facade crate).
//!
//! Re-exports the workspace crates under stable paths
//! (`scribble_blob::{core,input,term,types}`) and holds the binary's
//! configuration and logging setup.

pub mod config;
pub mod logging;

pub use scribble_blob_core as core;
pub use scribble_blob_input as input;
pub use scribble_blob_term as term;
pub use scribble_blob_types as types;

pub use config::AppConfig;
