//! Error types for the smartsave application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Naming errors
    #[error("Malformed scene filename '{name}': {reason}")]
    MalformedFilename { name: String, reason: String },

    #[error("Invalid {field}: {message}")]
    InvalidLabel { field: String, message: String },

    #[error("Version overflow: no version available after {0}")]
    VersionOverflow(u32),

    // Save errors
    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error("Failed to save {}: {source}", .path.display())]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedFilename {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Exit code the binary reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MalformedFilename { .. } | Error::InvalidLabel { .. } => {
                exit_codes::MALFORMED_INPUT
            }
            Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                exit_codes::CONFIG_ERROR
            }
            Error::DestinationExists(_) | Error::SaveFailed { .. } => exit_codes::SAVE_ERROR,
            _ => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const MALFORMED_INPUT: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const SAVE_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            Error::malformed("bad.ma", "no fields").exit_code(),
            exit_codes::MALFORMED_INPUT
        );
        assert_eq!(
            Error::Config("missing".into()).exit_code(),
            exit_codes::CONFIG_ERROR
        );
        assert_eq!(
            Error::DestinationExists(PathBuf::from("a_b_v001.ma")).exit_code(),
            exit_codes::SAVE_ERROR
        );
        assert_eq!(
            Error::VersionOverflow(u32::MAX).exit_code(),
            exit_codes::UNEXPECTED_ERROR
        );
    }

    #[test]
    fn test_malformed_message() {
        let err = Error::malformed("bad.ma", "expected 3 fields, found 1");
        assert_eq!(
            err.to_string(),
            "Malformed scene filename 'bad.ma': expected 3 fields, found 1"
        );
    }
}
