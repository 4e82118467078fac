//! CopyDecision - outcome of comparing a source file with its destination counterpart

/// What to do with a single source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyDecision {
    /// Destination counterpart does not exist
    Create,

    /// Destination exists with a different last-write timestamp.
    /// Pass direction alone determines which side wins; newer-ness is
    /// irrelevant and content is never compared.
    Overwrite,

    /// Destination exists with an exactly equal last-write timestamp
    Skip,
}

impl CopyDecision {
    /// Does this decision require a copy operation?
    pub fn requires_copy(&self) -> bool {
        matches!(self, CopyDecision::Create | CopyDecision::Overwrite)
    }

    /// Short label for reporting.
    pub fn label(&self) -> &'static str {
        match self {
            CopyDecision::Create => "Create",
            CopyDecision::Overwrite => "Overwrite",
            CopyDecision::Skip => "Skip",
        }
    }
}
