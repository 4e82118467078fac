//! Copy execution under dry-run, confirm, and unconditional modes

mod copy;
mod prompt;

pub use copy::copy_file;
pub use prompt::{Prompt, TermPrompt};

use crate::config::SyncOptions;
use crate::types::{CopyDecision, FileCandidate, SyncError};
use std::path::Path;

/// Result of executing one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// File was copied; carries the byte count
    Copied(u64),

    /// Dry-run: the action was only described
    Planned,

    /// Confirm mode: operator declined. A normal outcome, not an error.
    Declined,
}

/// Carries out `Create`/`Overwrite` decisions for one pass.
///
/// The confirm-mode terminal is injected through [`Prompt`] so the executor
/// runs under test without a real console.
pub struct CopyExecutor<'a> {
    options: &'a SyncOptions,
    prompt: &'a mut dyn Prompt,
}

impl<'a> CopyExecutor<'a> {
    pub fn new(options: &'a SyncOptions, prompt: &'a mut dyn Prompt) -> Self {
        Self { options, prompt }
    }

    /// Execute one copy decision against `destination`.
    ///
    /// Dry-run performs zero filesystem mutation, not even directory
    /// creation. In confirm mode the parent directory is created only after
    /// an accepted prompt, so a decline leaves no trace. A failed directory
    /// creation or copy is fatal to the current pass and is returned as an
    /// error for the orchestrator to report.
    pub fn execute(
        &mut self,
        source: &FileCandidate,
        destination: &Path,
        decision: CopyDecision,
    ) -> Result<CopyOutcome, SyncError> {
        debug_assert!(decision.requires_copy(), "skip decisions never reach the executor");

        if self.options.dry_run {
            return Ok(CopyOutcome::Planned);
        }

        if self.options.confirm {
            let accepted = self
                .prompt
                .confirm_copy(&source.path, destination)
                .map_err(SyncError::Prompt)?;
            if !accepted {
                return Ok(CopyOutcome::Declined);
            }
        }

        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SyncError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let bytes = copy_file(&source.path, destination).map_err(|err| SyncError::Copy {
            from: source.path.clone(),
            to: destination.to_path_buf(),
            source: err,
        })?;

        Ok(CopyOutcome::Copied(bytes))
    }
}
