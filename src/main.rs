//! Smartsave - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use smartsave::{
    cli::{Args, Command},
    config::{validate_config, validate_record, Config},
    error::{exit_codes, Result},
    fs::resolve_config_path,
    output::{print_error, print_info, print_record, print_success, print_versions},
    save::{increment_save, save, CopyWriter},
    scene::{list_versions, next_available_version, SceneFileRecord},
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration
    let mut config = match resolve_config_path(args.config.as_deref()) {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            Config::load(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    let ordering = config.behavior.version_ordering;

    match args.command {
        Command::Parse { path, json } => {
            let record = SceneFileRecord::parse(&path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print_record(&record);
            }
        }
        Command::Format { record } => {
            let record = record.resolve(&config)?;
            validate_record(&record)?;
            println!("{}", record.path().display());
        }
        Command::Next { record } => {
            let record = record.resolve(&config)?;
            validate_record(&record)?;
            println!("{}", next_available_version(&record, ordering)?);
        }
        Command::List { record } => {
            let record = record.resolve(&config)?;
            validate_record(&record)?;
            print_versions(&record, &list_versions(&record)?);
        }
        Command::Save {
            from,
            increment,
            record,
        } => {
            let mut record = record.resolve(&config)?;
            validate_record(&record)?;

            let mut writer = CopyWriter::new(from)?;
            print_info(&format!("Saving {}", writer.source().display()));

            let saved = if increment {
                increment_save(&mut record, &mut writer, ordering, config.behavior.overwrite)?
            } else {
                save(&record, &mut writer, config.behavior.overwrite)?
            };
            print_success(&format!("Saved {}", saved.display()));
        }
    }

    Ok(())
}
