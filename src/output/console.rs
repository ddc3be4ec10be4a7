//! Console output utilities.

use console::style;

use crate::scene::{ExistingVersion, SceneFileRecord};

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the fields of a scene file record.
pub fn print_record(record: &SceneFileRecord) {
    println!("{}", style(record.filename()).bold());
    println!("  Directory:  {}", record.directory.display());
    println!("  Descriptor: {}", record.descriptor);
    println!("  Task:       {}", record.task);
    println!("  Version:    {}", record.version);
    println!("  Extension:  {}", record.extension);
}

/// Print the versions found for a record's descriptor/task/extension.
pub fn print_versions(record: &SceneFileRecord, versions: &[ExistingVersion]) {
    if versions.is_empty() {
        print_info(&format!(
            "No versions of {} in {}",
            record.filename(),
            record.directory.display()
        ));
        return;
    }

    for existing in versions {
        println!(
            "  {:>5}  {}",
            style(existing.version).green(),
            existing.path.display()
        );
    }
}
