//! Writers that put a scene at its destination path.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Something that can write the current scene to a path ("save as").
///
/// Implementations report a missing destination directory as
/// [`io::ErrorKind::NotFound`] so the caller can create it and retry.
pub trait SceneWriter {
    fn save_as(&mut self, destination: &Path) -> io::Result<()>;
}

/// Saves by copying a working file to the destination.
#[derive(Debug, Clone)]
pub struct CopyWriter {
    source: PathBuf,
}

impl CopyWriter {
    /// Create a writer for an existing working file.
    pub fn new(source: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        if !source.is_file() {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Working file not found: {}", source.display()),
            )));
        }
        Ok(Self { source })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl SceneWriter for CopyWriter {
    fn save_as(&mut self, destination: &Path) -> io::Result<()> {
        // Copying a file onto itself truncates it.
        if destination.exists()
            && std::fs::canonicalize(&self.source)? == std::fs::canonicalize(destination)?
        {
            debug!("{} is already the working file", destination.display());
            return Ok(());
        }
        std::fs::copy(&self.source, destination).map(|_| ())
    }
}
