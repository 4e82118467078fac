//! Core type definitions for dsync

mod candidate;
mod decision;
mod error;

pub use candidate::{FileAttrs, FileCandidate};
pub use decision::CopyDecision;
pub use error::SyncError;
