//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, VersionOrdering};
use crate::error::Result;
use crate::scene::SceneFileRecord;

/// Versioned scene-file naming and saving.
#[derive(Parser, Debug)]
#[command(
    name = "smartsave",
    version,
    about = "Derive, version and save structured scene-file names",
    long_about = "Manage scene files named <descriptor>_<task>_v<version><extension>.\n\n\
                  Parses and formats names, finds the next free version in a folder, \
                  and saves a working file to the computed destination."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "SMARTSAVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// How to pick the latest existing version.
    #[arg(long, value_enum, global = true)]
    pub ordering: Option<OrderingArg>,

    /// Allow saving over an existing file.
    #[arg(long, global = true)]
    pub overwrite: bool,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a scene file path into its fields.
    Parse {
        /// Scene file path to parse.
        path: PathBuf,

        /// Print the record as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the path for a record.
    Format {
        #[command(flatten)]
        record: RecordArgs,
    },
    /// Print the next available version number.
    Next {
        #[command(flatten)]
        record: RecordArgs,
    },
    /// List existing versions in the scene directory.
    List {
        #[command(flatten)]
        record: RecordArgs,
    },
    /// Save a working file to the record's path.
    Save {
        /// Working file to save.
        #[arg(long)]
        from: PathBuf,

        /// Save as the next available version.
        #[arg(short, long)]
        increment: bool,

        #[command(flatten)]
        record: RecordArgs,
    },
}

/// Record fields. A path is parsed first; flags override its fields.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct RecordArgs {
    /// Existing scene file path to start from.
    pub path: Option<PathBuf>,

    /// Scene directory.
    #[arg(short = 'd', long = "dir")]
    pub directory: Option<PathBuf>,

    /// Descriptor (subject of the scene).
    #[arg(long)]
    pub descriptor: Option<String>,

    /// Task (pipeline stage).
    #[arg(short, long)]
    pub task: Option<String>,

    /// Version number.
    #[arg(id = "scene_version", short = 'n', long = "ver", value_parser = clap::value_parser!(u32).range(1..))]
    pub version: Option<u32>,

    /// File extension, including the leading dot.
    #[arg(short, long = "ext")]
    pub extension: Option<String>,
}

impl RecordArgs {
    /// Build a record from the path (or config defaults) and flag overrides.
    pub fn resolve(&self, config: &Config) -> Result<SceneFileRecord> {
        let mut record = match &self.path {
            Some(path) => SceneFileRecord::parse(path)?,
            None => config.default_record(),
        };

        if let Some(dir) = &self.directory {
            record.directory = dir.clone();
        }

        if let Some(descriptor) = &self.descriptor {
            record.descriptor = descriptor.clone();
        }

        if let Some(task) = &self.task {
            record.task = task.clone();
        }

        if let Some(version) = self.version {
            record.version = version;
        }

        if let Some(extension) = &self.extension {
            record.extension = extension.clone();
        }

        Ok(record)
    }
}

/// CLI version ordering argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrderingArg {
    /// Compare version numbers.
    Numeric,
    /// Sort filenames as strings.
    Lexical,
}

impl From<OrderingArg> for VersionOrdering {
    fn from(arg: OrderingArg) -> Self {
        match arg {
            OrderingArg::Numeric => VersionOrdering::Numeric,
            OrderingArg::Lexical => VersionOrdering::Lexical,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(ordering) = self.ordering {
            config.behavior.version_ordering = ordering.into();
        }

        // Only override if set to non-default
        if self.overwrite {
            config.behavior.overwrite = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(root: &str) -> Config {
        let mut config = Config::default();
        config.defaults.workspace_root = Some(PathBuf::from(root));
        config
    }

    #[test]
    fn test_resolve_from_defaults() {
        let record = RecordArgs::default().resolve(&config_in("/ship")).unwrap();
        assert_eq!(record.path(), PathBuf::from("/ship/scenes/main_model_v001.ma"));
    }

    #[test]
    fn test_resolve_path_with_overrides() {
        let args = RecordArgs {
            path: Some(PathBuf::from("/ship/scenes/spaceship_model_v031.ma")),
            task: Some("rig".to_string()),
            version: Some(2),
            ..Default::default()
        };
        let record = args.resolve(&config_in("/other")).unwrap();
        assert_eq!(
            record.path(),
            PathBuf::from("/ship/scenes/spaceship_rig_v002.ma")
        );
    }

    #[test]
    fn test_resolve_malformed_path() {
        let args = RecordArgs {
            path: Some(PathBuf::from("bad.ma")),
            ..Default::default()
        };
        assert!(args.resolve(&Config::default()).is_err());
    }

    #[test]
    fn test_parse_command_line() {
        let args = Args::parse_from([
            "smartsave",
            "save",
            "--from",
            "work.ma",
            "--increment",
            "--descriptor",
            "spaceship",
            "--ordering",
            "lexical",
        ]);

        let mut config = Config::default();
        args.merge_into_config(&mut config);
        assert_eq!(config.behavior.version_ordering, VersionOrdering::Lexical);
        assert!(!config.behavior.overwrite);

        match args.command {
            Command::Save {
                from,
                increment,
                record,
            } => {
                assert_eq!(from, PathBuf::from("work.ma"));
                assert!(increment);
                assert_eq!(record.descriptor.as_deref(), Some("spaceship"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_version_must_be_positive() {
        assert!(Args::try_parse_from(["smartsave", "format", "--ver", "0"]).is_err());
    }
}
