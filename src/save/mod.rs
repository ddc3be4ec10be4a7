//! Save module.
//!
//! Provides:
//! - The scene writer seam and a file-copy writer
//! - Saving with one retry after creating a missing directory
//! - Incremental saves

pub mod persist;
pub mod writer;

pub use persist::{increment_save, save};
pub use writer::{CopyWriter, SceneWriter};
