//! Output module for console output.
//!
//! Provides:
//! - Colored status messages
//! - Record and version listings

pub mod console;

pub use console::{print_error, print_info, print_record, print_success, print_versions};
