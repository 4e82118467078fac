//! Confirm-mode prompting

use console::Term;
use std::io;
use std::path::Path;

/// Injected confirm-mode capability.
///
/// The engine only ever asks one question; abstracting it keeps the
/// executor testable without a real terminal.
pub trait Prompt {
    /// Ask whether `from` should be copied to `to`. `Ok(false)` is a normal
    /// decline, including blank input.
    fn confirm_copy(&mut self, from: &Path, to: &Path) -> io::Result<bool>;
}

/// Interactive prompt on the process's terminal.
///
/// Blocks the (single) thread until the operator answers; there is no
/// timeout. Anything but a leading `y`/`Y` declines, so hitting enter skips
/// the file.
pub struct TermPrompt {
    term: Term,
}

impl TermPrompt {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TermPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TermPrompt {
    fn confirm_copy(&mut self, from: &Path, to: &Path) -> io::Result<bool> {
        self.term.write_str(&format!(
            "Copy {} to {} [y/N] ",
            from.display(),
            to.display()
        ))?;
        let line = self.term.read_line()?;
        Ok(is_affirmative(&line))
    }
}

/// Only a leading `y` (any case) counts as yes.
pub(crate) fn is_affirmative(input: &str) -> bool {
    input
        .trim_start()
        .chars()
        .next()
        .map(|c| c.eq_ignore_ascii_case(&'y'))
        .unwrap_or(false)
}
