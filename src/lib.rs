//! # dsync - Directory Tree Synchronization
//!
//! Echo or mirror two directory trees, never deleting anything.
//!
//! Echo copies files that are missing or carry a different last-write
//! timestamp from the source to the destination. Mirror runs a second,
//! reversed pass afterwards. Decisions are timestamp-only; content is
//! never inspected.

// Module declarations
pub mod commands;
pub mod config;
pub mod diff;
pub mod executor;
pub mod filter;
pub mod scanner;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use config::{SyncMode, SyncOptions};
pub use types::{CopyDecision, FileAttrs, FileCandidate, SyncError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
