//! Configuration management

use crate::types::SyncError;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Sync direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SyncMode {
    /// One pass: source -> destination
    #[default]
    Echo,

    /// Two passes: source -> destination, then destination -> source
    Mirror,
}

/// Command-line interface for dsync
#[derive(Debug, Parser)]
#[command(
    name = "dsync",
    version,
    about = "Syncs two directories without ever deleting anything",
    long_about = "dsync is a small utility that syncs two directories.\n\
        Echo copies the missing files and files with differing timestamps from \
        the source to the destination (A -> B).\n\
        Mirror does the same, then checks the destination against the source \
        (A -> B, B -> A).\n\
        No files are deleted in either mode: deleting a file at the source never \
        deletes it at the destination.\n\
        Always run the initial sync with --test to see what is going to happen.\n\
        Exception patterns: use the wildcard form (e.g. *.jpg) to skip a file \
        extension, or a plain substring (e.g. temp) to skip every file whose \
        directory path contains it - \"temporary Files\", \"my temp\" all match."
)]
pub struct Cli {
    /// Source directory
    #[arg(short, long)]
    pub source: PathBuf,

    /// Destination directory
    #[arg(short, long)]
    pub destination: PathBuf,

    /// Sync option: echo or mirror
    #[arg(short = 'o', long = "option", value_enum, default_value = "echo")]
    pub option: SyncMode,

    /// Comma-separated exception patterns (*.ext or directory substring)
    #[arg(short, long, value_delimiter = ',')]
    pub exception: Vec<String>,

    /// Dry run: report intended actions, perform no changes
    #[arg(short = 't', long = "test")]
    pub test: bool,

    /// Prompt before copying each file (default answer is No)
    #[arg(short, long)]
    pub confirm: bool,

    /// Skip files carrying the system attribute
    #[arg(long)]
    pub skip_system: bool,

    /// Skip hidden files
    #[arg(long)]
    pub skip_hidden: bool,
}

/// Immutable configuration for one dsync invocation.
///
/// Built once from the CLI, shared read-only by every pass.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Source root directory
    pub source: PathBuf,

    /// Destination root directory
    pub destination: PathBuf,

    /// Echo (one pass) or Mirror (two passes)
    pub mode: SyncMode,

    /// Report actions without touching the filesystem
    pub dry_run: bool,

    /// Prompt per pending copy
    pub confirm: bool,

    /// Exclude system-attributed entries
    pub skip_system: bool,

    /// Exclude hidden entries
    pub skip_hidden: bool,

    /// Exception patterns, evaluated as a set (order never matters)
    pub exceptions: Vec<String>,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            destination: PathBuf::new(),
            mode: SyncMode::Echo,
            dry_run: false,
            confirm: false,
            skip_system: false,
            skip_hidden: false,
            exceptions: Vec::new(),
        }
    }
}

impl TryFrom<Cli> for SyncOptions {
    type Error = SyncError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let options = SyncOptions {
            source: cli.source,
            destination: cli.destination,
            mode: cli.option,
            dry_run: cli.test,
            confirm: cli.confirm,
            skip_system: cli.skip_system,
            skip_hidden: cli.skip_hidden,
            // Empty strings from trailing commas carry no meaning
            exceptions: cli
                .exception
                .into_iter()
                .filter(|p| !p.is_empty())
                .collect(),
        };
        options.validate()?;
        Ok(options)
    }
}

impl SyncOptions {
    /// Validate configuration before any pass runs.
    pub fn validate(&self) -> Result<(), SyncError> {
        if !self.source.is_dir() {
            return Err(SyncError::InvalidSourceRoot {
                path: self.source.clone(),
            });
        }

        if self.source == self.destination {
            return Err(SyncError::SameSourceDestination);
        }

        Ok(())
    }

    /// Create the destination root if it does not exist.
    ///
    /// Suppressed in dry-run mode, which performs zero filesystem mutation.
    pub fn ensure_destination_root(&self) -> Result<(), SyncError> {
        if self.dry_run || self.destination.is_dir() {
            return Ok(());
        }

        std::fs::create_dir_all(&self.destination).map_err(|source| {
            SyncError::DestinationRootCreate {
                path: self.destination.clone(),
                source,
            }
        })
    }
}
