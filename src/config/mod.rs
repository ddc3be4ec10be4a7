//! Configuration module for smartsave.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Version ordering policy
//! - Configuration and record validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{BehaviorConfig, Config, DefaultsConfig};
pub use modes::VersionOrdering;
pub use validation::{validate_config, validate_record};
