//! Sync orchestration: enumerate, filter, decide, execute - once per pass

use crate::config::{SyncMode, SyncOptions};
use crate::diff::{decide, destination_path};
use crate::executor::{CopyExecutor, CopyOutcome, Prompt, TermPrompt};
use crate::filter::FilterEngine;
use crate::scanner::walk_files;
use crate::types::{FileAttrs, FileCandidate, SyncError};
use crate::ui::Reporter;
use std::path::Path;

/// Counters for a single pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Files copied (create + overwrite)
    pub copied: usize,

    /// Bytes copied
    pub bytes_copied: u64,

    /// Dry-run: actions described but not performed
    pub planned: usize,

    /// Destination already had an exactly equal timestamp
    pub up_to_date: usize,

    /// Confirm mode: operator declined
    pub declined: usize,

    /// Removed by exception patterns or attribute flags
    pub excluded: usize,

    /// Recoverable diagnostics (unreadable subtrees, vanished files)
    pub walk_warnings: usize,
}

/// Result of one pass over an ordered (source, destination) pair.
///
/// A pass-fatal copy error is captured here rather than propagated: in
/// mirror mode the second pass still runs after a first-pass abort, since
/// the two passes are independent invocations.
#[derive(Debug)]
pub struct PassOutcome {
    pub stats: PassStats,
    pub error: Option<SyncError>,
}

impl PassOutcome {
    pub fn aborted(&self) -> bool {
        self.error.is_some()
    }
}

/// Outcome of a whole run: one pass for echo, two for mirror.
#[derive(Debug)]
pub struct SyncReport {
    pub passes: Vec<PassOutcome>,
}

impl SyncReport {
    pub fn total_copied(&self) -> usize {
        self.passes.iter().map(|p| p.stats.copied).sum()
    }

    pub fn total_planned(&self) -> usize {
        self.passes.iter().map(|p| p.stats.planned).sum()
    }

    pub fn any_aborted(&self) -> bool {
        self.passes.iter().any(PassOutcome::aborted)
    }
}

/// Run a sync with the interactive terminal prompt.
pub fn run(options: &SyncOptions) -> Result<SyncReport, SyncError> {
    let mut prompt = TermPrompt::new();
    let reporter = Reporter::new();
    run_with(options, &mut prompt, &reporter)
}

/// Run a sync with an injected prompt and reporter.
///
/// Setup failures (missing source root, destination-root creation) are
/// returned as errors before any pass runs. Pass-fatal copy failures are
/// reported and recorded per pass, and the run still completes normally.
pub fn run_with(
    options: &SyncOptions,
    prompt: &mut dyn Prompt,
    reporter: &Reporter,
) -> Result<SyncReport, SyncError> {
    options.validate()?;
    options.ensure_destination_root()?;

    if options.dry_run {
        reporter.options_preview(options);
    }

    let mut passes = Vec::with_capacity(2);

    reporter.pass_header(1, &options.source, &options.destination);
    passes.push(run_pass(
        &options.source,
        &options.destination,
        options,
        prompt,
        reporter,
    ));

    // The reverse pass shares the options but no state: whatever pass one
    // copied now has equal timestamps on both sides and naturally skips.
    if options.mode == SyncMode::Mirror {
        reporter.pass_header(2, &options.destination, &options.source);
        passes.push(run_pass(
            &options.destination,
            &options.source,
            options,
            prompt,
            reporter,
        ));
    }

    Ok(SyncReport { passes })
}

/// One pass: enumerate source, filter, decide against destination, execute.
///
/// Strictly sequential; each file is fully handled before the next. The
/// walker's subtree failures are recoverable; executor failures abort the
/// pass, abandoning its remaining files.
fn run_pass(
    source_root: &Path,
    destination_root: &Path,
    options: &SyncOptions,
    prompt: &mut dyn Prompt,
    reporter: &Reporter,
) -> PassOutcome {
    let mut stats = PassStats::default();

    if root_attribute_skip(source_root, options) {
        reporter.root_skipped(source_root);
        return PassOutcome { stats, error: None };
    }

    let filter = FilterEngine::new(options);
    let mut executor = CopyExecutor::new(options, prompt);

    for item in walk_files(source_root) {
        let path = match item {
            Ok(path) => path,
            Err(err) => {
                reporter.walk_warning(&err);
                stats.walk_warnings += 1;
                continue;
            }
        };

        // The walk is not a snapshot; a file can vanish before we stat it
        let candidate = match FileCandidate::probe(path.clone()) {
            Ok(candidate) => candidate,
            Err(err) => {
                reporter.candidate_warning(&path, &err);
                stats.walk_warnings += 1;
                continue;
            }
        };

        if filter.exclude_reason(&candidate).is_some() {
            stats.excluded += 1;
            continue;
        }

        let Some(destination) = destination_path(source_root, destination_root, &candidate.path)
        else {
            stats.walk_warnings += 1;
            continue;
        };

        let decision = match decide(candidate.mtime, &destination) {
            Ok(decision) => decision,
            Err(err) => {
                reporter.candidate_warning(&destination, &err);
                stats.walk_warnings += 1;
                continue;
            }
        };

        if !decision.requires_copy() {
            stats.up_to_date += 1;
            continue;
        }

        match executor.execute(&candidate, &destination, decision) {
            Ok(CopyOutcome::Copied(bytes)) => {
                reporter.copied(&candidate.path, &destination);
                stats.copied += 1;
                stats.bytes_copied += bytes;
            }
            Ok(CopyOutcome::Planned) => {
                reporter.planned(decision.label(), &candidate.path, &destination);
                stats.planned += 1;
            }
            Ok(CopyOutcome::Declined) => {
                reporter.declined(&candidate.path);
                stats.declined += 1;
            }
            Err(err) => {
                reporter.pass_aborted(&err);
                return PassOutcome {
                    stats,
                    error: Some(err),
                };
            }
        }
    }

    reporter.pass_summary(&stats);
    PassOutcome { stats, error: None }
}

/// Should this pass be skipped because its source root carries a skipped
/// attribute?
///
/// Only the pass's root is gated; nested directories are filtered solely
/// through their files. Filesystem roots are exempt so a whole volume can
/// still be synced.
fn root_attribute_skip(source_root: &Path, options: &SyncOptions) -> bool {
    if !(options.skip_system || options.skip_hidden) {
        return false;
    }
    if source_root.parent().is_none() {
        return false;
    }

    match FileAttrs::probe(source_root) {
        Ok(attrs) => {
            (options.skip_system && attrs.system) || (options.skip_hidden && attrs.hidden)
        }
        Err(_) => false,
    }
}
