//! Pass progress and summary output

use crate::commands::sync::PassStats;
use crate::config::{SyncMode, SyncOptions};
use crate::types::SyncError;
use console::style;
use indicatif::HumanBytes;
use std::path::Path;

/// Prints pass progress, diagnostics, and summaries.
///
/// Recoverable walk diagnostics go to stderr; everything else to stdout.
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Reporter that prints nothing; used by tests.
    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    /// Echo the resolved options before a dry run.
    pub fn options_preview(&self, options: &SyncOptions) {
        if self.quiet {
            return;
        }
        let mode = match options.mode {
            SyncMode::Echo => "Echoing",
            SyncMode::Mirror => "Mirroring",
        };
        println!("- {}", style(mode).bold());
        println!("- Source: {}", options.source.display());
        println!("- Destination: {}", options.destination.display());
        println!("- Confirm: {}", options.confirm);
        println!("- Skip system: {}", options.skip_system);
        println!("- Skip hidden: {}", options.skip_hidden);
        println!("- Exceptions:");
        for pattern in &options.exceptions {
            println!("\t {}", pattern);
        }
    }

    pub fn pass_header(&self, index: usize, source: &Path, destination: &Path) {
        if self.quiet {
            return;
        }
        println!(
            "{} {} -> {}",
            style(format!("Pass {}:", index)).bold(),
            source.display(),
            destination.display()
        );
    }

    /// A subtree the walker could not enter; the pass continues.
    pub fn walk_warning(&self, err: &ignore::Error) {
        if self.quiet {
            return;
        }
        eprintln!("{} {}", style("Warning:").yellow(), err);
    }

    /// A candidate whose metadata could not be read; the pass continues.
    pub fn candidate_warning(&self, path: &Path, err: &std::io::Error) {
        if self.quiet {
            return;
        }
        eprintln!(
            "{} failed to read metadata for {}: {}",
            style("Warning:").yellow(),
            path.display(),
            err
        );
    }

    /// Dry-run description of an intended copy.
    pub fn planned(&self, label: &str, from: &Path, to: &Path) {
        if self.quiet {
            return;
        }
        println!(
            "  {} {} -> {}",
            style(format!("{:9}", label.to_uppercase())).cyan(),
            from.display(),
            to.display()
        );
    }

    pub fn copied(&self, from: &Path, to: &Path) {
        if self.quiet {
            return;
        }
        println!("Copying {} to {} ...", from.display(), to.display());
    }

    pub fn declined(&self, from: &Path) {
        if self.quiet {
            return;
        }
        println!("Skipped {} (declined)", from.display());
    }

    /// The pass's source root itself carries a skipped attribute.
    pub fn root_skipped(&self, root: &Path) {
        if self.quiet {
            return;
        }
        println!(
            "Skipping pass: source root {} carries a skipped attribute",
            root.display()
        );
    }

    /// A copy or directory-creation failure aborted the pass.
    pub fn pass_aborted(&self, err: &SyncError) {
        if self.quiet {
            return;
        }
        eprintln!("{} {}", style("Pass aborted:").red().bold(), err);
    }

    pub fn pass_summary(&self, stats: &PassStats) {
        if self.quiet {
            return;
        }
        println!(
            "  {} copied ({}), {} planned, {} up to date, {} declined, {} excluded, {} warnings",
            stats.copied,
            HumanBytes(stats.bytes_copied),
            stats.planned,
            stats.up_to_date,
            stats.declined,
            stats.excluded,
            stats.walk_warnings
        );
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}
