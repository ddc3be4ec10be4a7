//! Validation of scene name fields and configuration.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use crate::scene::SceneFileRecord;
use regex::Regex;
use std::sync::LazyLock;

/// Characters a descriptor or task may not contain: the field separator,
/// path separators, characters reserved on Windows, and control characters.
static LABEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[^_/\\:*?"<>|\x00-\x1f]+$"#).unwrap());

/// Extension: empty, or a dot followed by alphanumerics.
static EXTENSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\.[A-Za-z0-9]+)?$").unwrap());

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_descriptor(&config.defaults.descriptor).map_err(into_config_error)?;
    validate_task(&config.defaults.task).map_err(into_config_error)?;
    validate_extension(&config.defaults.extension).map_err(into_config_error)?;

    Ok(())
}

/// Validate every field of a record before it is formatted or saved.
pub fn validate_record(record: &SceneFileRecord) -> Result<()> {
    validate_descriptor(&record.descriptor)?;
    validate_task(&record.task)?;
    validate_extension(&record.extension)?;

    if record.version == 0 {
        return Err(Error::InvalidLabel {
            field: "version".to_string(),
            message: "Version must be at least 1".to_string(),
        });
    }

    Ok(())
}

/// Validate a descriptor. It is required.
pub fn validate_descriptor(descriptor: &str) -> Result<()> {
    if descriptor.is_empty() {
        return Err(Error::InvalidLabel {
            field: "descriptor".to_string(),
            message: "Descriptor cannot be empty".to_string(),
        });
    }

    validate_label("descriptor", descriptor)
}

/// Validate a task. An empty task is allowed.
pub fn validate_task(task: &str) -> Result<()> {
    if task.is_empty() {
        return Ok(());
    }

    validate_label("task", task)
}

fn validate_label(field: &str, value: &str) -> Result<()> {
    if value.contains('_') {
        return Err(Error::InvalidLabel {
            field: field.to_string(),
            message: format!(
                "'{}' contains '_', which separates the filename fields",
                value
            ),
        });
    }

    if !LABEL_PATTERN.is_match(value) {
        return Err(Error::InvalidLabel {
            field: field.to_string(),
            message: format!(
                "'{}' contains characters not allowed in filenames",
                value
            ),
        });
    }

    Ok(())
}

/// Validate an extension.
pub fn validate_extension(extension: &str) -> Result<()> {
    if !EXTENSION_PATTERN.is_match(extension) {
        return Err(Error::InvalidLabel {
            field: "extension".to_string(),
            message: format!(
                "'{}' must be a dot followed by letters or digits (e.g. \".ma\")",
                extension
            ),
        });
    }

    Ok(())
}

fn into_config_error(err: Error) -> Error {
    match err {
        Error::InvalidLabel { field, message } => Error::ConfigValidation {
            field: format!("defaults.{}", field),
            message,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_labels() {
        assert!(validate_descriptor("spaceship").is_ok());
        assert!(validate_descriptor("env-forest.01").is_ok());
        assert!(validate_task("model").is_ok());
        assert!(validate_task("").is_ok());
    }

    #[test]
    fn test_label_with_underscore() {
        assert!(matches!(
            validate_descriptor("space_ship"),
            Err(Error::InvalidLabel { .. })
        ));
        assert!(validate_task("model_hi").is_err());
    }

    #[test]
    fn test_label_with_reserved_characters() {
        assert!(validate_descriptor("").is_err());
        assert!(validate_descriptor("a/b").is_err());
        assert!(validate_descriptor("a\\b").is_err());
        assert!(validate_task("what?").is_err());
        assert!(validate_task("tab\there").is_err());
    }

    #[test]
    fn test_extension() {
        assert!(validate_extension(".ma").is_ok());
        assert!(validate_extension(".mb").is_ok());
        assert!(validate_extension("").is_ok());
        assert!(validate_extension("ma").is_err());
        assert!(validate_extension(".").is_err());
        assert!(validate_extension(".tar.gz").is_err());
    }

    #[test]
    fn test_validate_record_version() {
        let record = SceneFileRecord::new("", "a", "b", 0, ".ma");
        assert!(validate_record(&record).is_err());
        assert!(validate_record(&record.with_version(1)).is_ok());
    }

    #[test]
    fn test_valid_record_with_dotted_labels() {
        let record = SceneFileRecord::new("", "env.forest", "layout", 3, "");
        assert!(validate_record(&record).is_ok());
        assert_eq!(SceneFileRecord::parse(record.path()).unwrap(), record);
    }

    #[test]
    fn test_validate_config_reports_field() {
        let mut config = Config::default();
        assert!(validate_config(&config).is_ok());

        config.defaults.task = "hi_res".to_string();
        match validate_config(&config) {
            Err(Error::ConfigValidation { field, .. }) => assert_eq!(field, "defaults.task"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
