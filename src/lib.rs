//! Smartsave - versioned scene-file naming
//!
//! This library derives, parses and increments structured scene-file names of
//! the form `<descriptor>_<task>_v<version><extension>`.
//!
//! # Features
//!
//! - Parse a scene path into a [`SceneFileRecord`] and format it back
//! - Find the next unused version in a folder
//! - Save a working file to the computed destination, creating missing
//!   directories and retrying once
//!
//! # Example
//!
//! ```no_run
//! use smartsave::{increment, save, CopyWriter, SceneFileRecord, VersionOrdering};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let record = SceneFileRecord::parse("scenes/spaceship_model_v031.ma")?;
//!     let next = increment(&record, VersionOrdering::Numeric)?;
//!
//!     let mut writer = CopyWriter::new("working.ma")?;
//!     let saved = save(&next, &mut writer, false)?;
//!     println!("Saved {}", saved.display());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod output;
pub mod save;
pub mod scene;

// Re-exports for convenience
pub use config::{Config, VersionOrdering};
pub use error::{Error, Result};
pub use save::{increment_save, save, CopyWriter, SceneWriter};
pub use scene::{increment, list_versions, next_available_version, SceneFileRecord};
