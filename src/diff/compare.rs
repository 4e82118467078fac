//! Timestamp-based comparison logic

use crate::types::CopyDecision;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Map a source file to its destination counterpart.
///
/// The file's path relative to the pass's source root is appended to the
/// destination root, so the destination tree mirrors the source tree's
/// relative layout exactly. Returns `None` for a path outside the source
/// root, which can only happen if the filesystem changed mid-walk.
pub fn destination_path(
    source_root: &Path,
    destination_root: &Path,
    source_file: &Path,
) -> Option<PathBuf> {
    let relative = source_file.strip_prefix(source_root).ok()?;
    Some(destination_root.join(relative))
}

/// Compare a source file's last-write timestamp against its destination
/// counterpart and decide what to do.
///
/// - Destination absent: `Create`.
/// - Timestamps exactly equal: `Skip`. No content check is performed, ever.
/// - Timestamps differ in either direction: `Overwrite`. The pass direction
///   alone determines which file wins; a newer destination is still replaced.
pub fn decide(source_mtime: SystemTime, destination: &Path) -> io::Result<CopyDecision> {
    let metadata = match std::fs::metadata(destination) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(CopyDecision::Create);
        }
        Err(err) => return Err(err),
    };

    let destination_mtime = metadata.modified()?;
    if destination_mtime == source_mtime {
        Ok(CopyDecision::Skip)
    } else {
        Ok(CopyDecision::Overwrite)
    }
}
