//! Lazy, permission-tolerant recursive file walker

use std::path::{Path, PathBuf};

/// Walk every regular file under `root`, lazily.
///
/// Yields one item per reachable file. An unreadable subdirectory surfaces
/// as a single `Err` item and the walk continues with its siblings; the
/// caller decides how to report it. Enumeration order is
/// filesystem-dependent and not stable across runs, and the iterator is
/// one-shot: walking again means re-reading a possibly changed tree.
///
/// Symbolic links are yielded as-is but never followed, so a self-referential
/// link cannot cause unbounded recursion. Hidden files are included here;
/// excluding them is a filter policy, not a traversal concern.
pub fn walk_files(root: &Path) -> impl Iterator<Item = Result<PathBuf, ignore::Error>> {
    ignore::WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(false)
        .follow_links(false)
        .build()
        .filter_map(|result| match result {
            Ok(entry) => match entry.file_type() {
                Some(file_type) if file_type.is_file() => Some(Ok(entry.into_path())),
                // Directories, symlinks and special files are not candidates
                _ => None,
            },
            Err(err) => Some(Err(err)),
        })
}
