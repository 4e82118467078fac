//! Directory traversal

mod walker;

pub use walker::walk_files;
