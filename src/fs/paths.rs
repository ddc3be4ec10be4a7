//! Path and directory management.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::Result;

/// Config filename looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "smartsave.toml";

/// Config filename inside the per-user config directory.
pub const USER_CONFIG_FILE: &str = "config.toml";

/// Resolve the configuration file to load.
///
/// An explicit path always wins. Otherwise `smartsave.toml` in the working
/// directory, then the per-user config file. Returns `None` when neither exists.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    user_config_path().filter(|path| path.is_file())
}

/// Per-user config file location (e.g. `~/.config/smartsave/config.toml`).
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "smartsave").map(|dirs| dirs.config_dir().join(USER_CONFIG_FILE))
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
