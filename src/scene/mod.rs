//! Scene file naming module.
//!
//! Provides:
//! - The scene file record type
//! - Filename parsing and formatting
//! - Directory scanning for the next available version

pub mod naming;
pub mod record;
pub mod versions;

pub use naming::{format, parse, version_tag};
pub use record::SceneFileRecord;
pub use versions::{increment, list_versions, next_available_version, ExistingVersion};
