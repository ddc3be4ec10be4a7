//! Scene filename parsing and formatting.
//!
//! Grammar: `<descriptor>_<task>_v<version><extension>`, version zero-padded
//! to [`VERSION_WIDTH`] digits.

use std::path::Path;

use crate::error::{Error, Result};
use crate::scene::record::SceneFileRecord;

/// Separator between the descriptor, task and version fields.
pub const FIELD_SEPARATOR: char = '_';

/// Prefix of the version field.
pub const VERSION_PREFIX: char = 'v';

/// Minimum rendered width of the version number.
pub const VERSION_WIDTH: usize = 3;

/// Parse a scene file path into a record.
///
/// The filename must split on `_` into exactly three fields, the last one
/// being `v` followed by digits. Whatever follows the digits is the
/// extension, so dots inside the descriptor or task are kept. Anything else
/// is a [`Error::MalformedFilename`].
pub fn parse(path: &Path) -> Result<SceneFileRecord> {
    let display = path.display().to_string();

    let filename = path
        .file_name()
        .ok_or_else(|| Error::malformed(&display, "path has no file name"))?
        .to_str()
        .ok_or_else(|| Error::malformed(&display, "file name is not valid UTF-8"))?;

    let fields: Vec<&str> = filename.split(FIELD_SEPARATOR).collect();
    let [descriptor, task, tail] = fields.as_slice() else {
        return Err(Error::malformed(
            &display,
            format!("expected 3 '_'-separated fields, found {}", fields.len()),
        ));
    };

    let (version, extension) = split_version_tail(tail)
        .ok_or_else(|| Error::malformed(&display, format!("invalid version tag '{}'", tail)))?;

    let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();

    Ok(SceneFileRecord {
        directory,
        descriptor: descriptor.to_string(),
        task: task.to_string(),
        version,
        extension: extension.to_string(),
    })
}

/// Split `v<digits><extension>` into the version and the extension.
///
/// The extension is empty or starts with `.`.
fn split_version_tail(tail: &str) -> Option<(u32, &str)> {
    let rest = tail.strip_prefix(VERSION_PREFIX)?;
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (digits, extension) = rest.split_at(digits_end);

    if !extension.is_empty() && !extension.starts_with('.') {
        return None;
    }
    parse_version_digits(digits).map(|version| (version, extension))
}

/// Render the filename for a record.
///
/// Versions of 1000 and above keep their natural width (`v1000`).
pub fn format(record: &SceneFileRecord) -> String {
    format!(
        "{}{sep}{}{sep}{}{}",
        record.descriptor,
        record.task,
        version_tag(record.version),
        record.extension,
        sep = FIELD_SEPARATOR,
    )
}

/// Render a version number as its tag (e.g. `v031`).
pub fn version_tag(version: u32) -> String {
    format!("{}{:0width$}", VERSION_PREFIX, version, width = VERSION_WIDTH)
}

/// Parse a `v<digits>` tag into its version number.
pub fn parse_version_tag(tag: &str) -> Option<u32> {
    tag.strip_prefix(VERSION_PREFIX).and_then(parse_version_digits)
}

/// Parse a non-empty run of ASCII digits into a version number.
pub(crate) fn parse_version_digits(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
