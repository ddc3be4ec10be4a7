//! Version ordering policy definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the latest existing version is picked when scanning a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionOrdering {
    /// Compare parsed version numbers (default).
    #[default]
    Numeric,
    /// Sort matching filenames as strings and take the last one.
    /// Only correct while every version fits in three digits.
    Lexical,
}

impl fmt::Display for VersionOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionOrdering::Numeric => write!(f, "numeric"),
            VersionOrdering::Lexical => write!(f, "lexical"),
        }
    }
}

impl FromStr for VersionOrdering {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "numeric" => Ok(VersionOrdering::Numeric),
            "lexical" => Ok(VersionOrdering::Lexical),
            _ => Err(format!("Unknown version ordering: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ordering() {
        assert_eq!("numeric".parse::<VersionOrdering>(), Ok(VersionOrdering::Numeric));
        assert_eq!("Lexical".parse::<VersionOrdering>(), Ok(VersionOrdering::Lexical));
        assert!("natural".parse::<VersionOrdering>().is_err());
    }

    #[test]
    fn test_display_matches_serde_name() {
        assert_eq!(VersionOrdering::Lexical.to_string(), "lexical");
        assert_eq!(VersionOrdering::default(), VersionOrdering::Numeric);
    }
}
