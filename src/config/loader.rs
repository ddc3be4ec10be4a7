//! Configuration structures and loading logic.

use crate::config::modes::VersionOrdering;
use crate::error::{Error, Result};
use crate::scene::SceneFileRecord;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Field defaults for records built without a path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default descriptor.
    #[serde(default = "default_descriptor")]
    pub descriptor: String,

    /// Default task.
    #[serde(default = "default_task")]
    pub task: String,

    /// Default extension, including the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Project workspace root. Falls back to the current directory.
    #[serde(default)]
    pub workspace_root: Option<PathBuf>,

    /// Scenes folder, relative to the workspace root.
    #[serde(default = "default_scenes_folder")]
    pub scenes_folder: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            descriptor: default_descriptor(),
            task: default_task(),
            extension: default_extension(),
            workspace_root: None,
            scenes_folder: default_scenes_folder(),
        }
    }
}

/// Versioning and save behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// How the latest existing version is picked.
    #[serde(default)]
    pub version_ordering: VersionOrdering,

    /// Whether saving may replace an existing file.
    #[serde(default)]
    pub overwrite: bool,
}

fn default_descriptor() -> String {
    "main".to_string()
}

fn default_task() -> String {
    "model".to_string()
}

fn default_extension() -> String {
    ".ma".to_string()
}

fn default_scenes_folder() -> PathBuf {
    PathBuf::from("scenes")
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the effective scenes directory.
    pub fn scenes_directory(&self) -> PathBuf {
        let root = self
            .defaults
            .workspace_root
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
        root.join(&self.defaults.scenes_folder)
    }

    /// Record built from the configured defaults, at version 1.
    pub fn default_record(&self) -> SceneFileRecord {
        SceneFileRecord::new(
            self.scenes_directory(),
            self.defaults.descriptor.clone(),
            self.defaults.task.clone(),
            1,
            self.defaults.extension.clone(),
        )
    }
}
