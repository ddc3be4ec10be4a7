//! Scene file record representation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scene::naming;

/// Default descriptor for a record built without a path.
pub const DEFAULT_DESCRIPTOR: &str = "main";

/// Default extension for a record built without a path.
pub const DEFAULT_EXTENSION: &str = ".ma";

/// A structured scene file path: `{directory}/{descriptor}_{task}_v{version}{extension}`.
///
/// Descriptor and task must not contain `_`, since it separates the fields.
/// This is a precondition of [`naming::format`], not something it checks;
/// see [`crate::config::validate_record`] for the explicit check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneFileRecord {
    /// Folder holding the scene file. Empty means the current directory.
    pub directory: PathBuf,

    /// Subject of the scene (e.g. "spaceship").
    pub descriptor: String,

    /// Pipeline stage (e.g. "model", "rig"). Empty when unset.
    pub task: String,

    /// Version number, rendered zero-padded to three digits.
    pub version: u32,

    /// File extension including the leading dot (e.g. ".ma").
    pub extension: String,
}

impl Default for SceneFileRecord {
    fn default() -> Self {
        Self {
            directory: PathBuf::new(),
            descriptor: DEFAULT_DESCRIPTOR.to_string(),
            task: String::new(),
            version: 1,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl SceneFileRecord {
    /// Build a record from explicit field values.
    pub fn new(
        directory: impl Into<PathBuf>,
        descriptor: impl Into<String>,
        task: impl Into<String>,
        version: u32,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            directory: directory.into(),
            descriptor: descriptor.into(),
            task: task.into(),
            version,
            extension: extension.into(),
        }
    }

    /// Parse a record from a scene file path.
    pub fn parse(path: impl AsRef<Path>) -> Result<Self> {
        naming::parse(path.as_ref())
    }

    /// Copy of this record with a different version.
    pub fn with_version(&self, version: u32) -> Self {
        Self {
            version,
            ..self.clone()
        }
    }

    /// Copy of this record in a different directory.
    pub fn with_directory(&self, directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..self.clone()
        }
    }

    /// The filename this record describes.
    pub fn filename(&self) -> String {
        naming::format(self)
    }

    /// Full destination path: directory joined with the filename.
    pub fn path(&self) -> PathBuf {
        self.directory.join(self.filename())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let record = SceneFileRecord::default();
        assert_eq!(record.descriptor, "main");
        assert_eq!(record.task, "");
        assert_eq!(record.version, 1);
        assert_eq!(record.extension, ".ma");
        assert_eq!(record.filename(), "main__v001.ma");
    }

    #[test]
    fn test_path_joins_directory() {
        let record = SceneFileRecord::new("/projects/scenes", "spaceship", "model", 31, ".ma");
        assert_eq!(
            record.path(),
            PathBuf::from("/projects/scenes/spaceship_model_v031.ma")
        );

        let relative = record.with_directory("");
        assert_eq!(relative.path(), PathBuf::from("spaceship_model_v031.ma"));
    }

    #[test]
    fn test_with_version_keeps_other_fields() {
        let record = SceneFileRecord::new("scenes", "spaceship", "rig", 3, ".mb");
        let bumped = record.with_version(4);
        assert_eq!(bumped.version, 4);
        assert_eq!(bumped.descriptor, "spaceship");
        assert_eq!(bumped.task, "rig");
        assert_eq!(bumped.extension, ".mb");
        assert_eq!(bumped.directory, PathBuf::from("scenes"));
        assert_eq!(record.version, 3);
    }

    #[test]
    fn test_json_shape() {
        let record = SceneFileRecord::new("scenes", "spaceship", "model", 31, ".ma");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["descriptor"], "spaceship");
        assert_eq!(json["version"], 31);
        assert_eq!(json["extension"], ".ma");
    }
}
