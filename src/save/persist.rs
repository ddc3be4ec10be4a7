//! Saving a record through a scene writer.

use std::io;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::VersionOrdering;
use crate::error::{Error, Result};
use crate::fs::ensure_dir;
use crate::save::writer::SceneWriter;
use crate::scene::{next_available_version, SceneFileRecord};

/// Save the scene to the record's path.
///
/// If the first attempt fails because the destination directory is missing,
/// the directory tree is created and the save is retried once. A second
/// failure is returned as [`Error::SaveFailed`].
pub fn save<W: SceneWriter + ?Sized>(
    record: &SceneFileRecord,
    writer: &mut W,
    overwrite: bool,
) -> Result<PathBuf> {
    let destination = record.path();

    if destination.exists() {
        if !overwrite {
            return Err(Error::DestinationExists(destination));
        }
        warn!("Overwriting {}", destination.display());
    }

    debug!("Saving scene to {}", destination.display());

    match writer.save_as(&destination) {
        Ok(()) => Ok(destination),
        Err(err) if is_missing_directory(record, &err) => {
            warn!(
                "Missing directories in {}, creating them now",
                record.directory.display()
            );
            ensure_dir(&record.directory).map_err(|err| match err {
                Error::Io(source) => Error::SaveFailed {
                    path: destination.clone(),
                    source,
                },
                other => other,
            })?;
            writer
                .save_as(&destination)
                .map_err(|source| Error::SaveFailed {
                    path: destination.clone(),
                    source,
                })?;
            Ok(destination)
        }
        Err(source) => Err(Error::SaveFailed {
            path: destination,
            source,
        }),
    }
}

/// Bump the record to the next available version, then save it.
pub fn increment_save<W: SceneWriter + ?Sized>(
    record: &mut SceneFileRecord,
    writer: &mut W,
    ordering: VersionOrdering,
    overwrite: bool,
) -> Result<PathBuf> {
    record.version = next_available_version(record, ordering)?;
    save(record, writer, overwrite)
}

fn is_missing_directory(record: &SceneFileRecord, err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::NotFound
        && !record.directory.as_os_str().is_empty()
        && !record.directory.exists()
}
