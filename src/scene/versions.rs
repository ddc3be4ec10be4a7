//! Directory scanning for existing scene versions.

use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use crate::config::VersionOrdering;
use crate::error::{Error, Result};
use crate::scene::naming::{parse_version_digits, FIELD_SEPARATOR, VERSION_PREFIX};
use crate::scene::record::SceneFileRecord;

/// A scene file found on disk for a descriptor/task/extension triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingVersion {
    pub version: u32,
    pub path: PathBuf,
}

/// Build the matcher for `{descriptor}_{task}_v*{extension}`.
///
/// The fields are literal; `*` is captured so its digits can be parsed.
fn version_pattern(record: &SceneFileRecord) -> Result<Regex> {
    let pattern = format!(
        "^{}{sep}{}{sep}{}(.*){}$",
        regex::escape(&record.descriptor),
        regex::escape(&record.task),
        VERSION_PREFIX,
        regex::escape(&record.extension),
        sep = FIELD_SEPARATOR,
    );
    Regex::new(&pattern).map_err(|e| Error::Config(format!("Invalid version pattern: {}", e)))
}

fn scan_directory(record: &SceneFileRecord) -> Result<Vec<ExistingVersion>> {
    let dir = if record.directory.as_os_str().is_empty() {
        Path::new(".")
    } else {
        record.directory.as_path()
    };

    if !dir.exists() {
        debug!("Scene directory {} does not exist", dir.display());
        return Ok(Vec::new());
    }

    let pattern = version_pattern(record)?;
    let mut found = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let Some(captures) = pattern.captures(filename) else {
            continue;
        };

        let digits = captures.get(1).map_or("", |m| m.as_str());
        match parse_version_digits(digits) {
            Some(version) => found.push(ExistingVersion {
                version,
                path: path.clone(),
            }),
            None => debug!("Skipping {}: no numeric version", filename),
        }
    }

    Ok(found)
}

/// List existing versions for the record's triple, in ascending version order.
pub fn list_versions(record: &SceneFileRecord) -> Result<Vec<ExistingVersion>> {
    let mut versions = scan_directory(record)?;
    versions.sort_by(|a, b| a.version.cmp(&b.version).then_with(|| a.path.cmp(&b.path)));
    Ok(versions)
}

/// Find the next unused version number in the record's directory.
///
/// Returns 1 when nothing matches or the directory does not exist.
pub fn next_available_version(record: &SceneFileRecord, ordering: VersionOrdering) -> Result<u32> {
    let existing = scan_directory(record)?;

    let latest = match ordering {
        VersionOrdering::Numeric => existing.iter().map(|v| v.version).max(),
        VersionOrdering::Lexical => existing
            .iter()
            .max_by(|a, b| a.path.file_name().cmp(&b.path.file_name()))
            .map(|v| v.version),
    };

    let Some(latest) = latest else {
        debug!("No existing versions for {}", record.filename());
        return Ok(1);
    };

    let next = latest
        .checked_add(1)
        .ok_or(Error::VersionOverflow(latest))?;
    debug!(
        "Latest version of {} is {} ({} ordering), next is {}",
        record.filename(),
        latest,
        ordering,
        next
    );
    Ok(next)
}

/// Return a copy of the record set to the next available version.
pub fn increment(record: &SceneFileRecord, ordering: VersionOrdering) -> Result<SceneFileRecord> {
    let version = next_available_version(record, ordering)?;
    Ok(record.with_version(version))
}
