//! Filesystem module.
//!
//! Provides:
//! - Config file discovery
//! - Directory creation

pub mod paths;

pub use paths::{ensure_dir, resolve_config_path, user_config_path};
