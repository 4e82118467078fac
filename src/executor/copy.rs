//! File copy primitive

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Copy `src` to `dest` using the write-then-rename strategy, preserving
/// the source's permissions and last-write timestamp.
///
/// Timestamp preservation is load-bearing: a re-run decides `Skip` only
/// because the copied file's mtime exactly equals the source's.
///
/// Returns the number of bytes copied. The caller is responsible for
/// creating `dest`'s parent directory.
pub fn copy_file(src: &Path, dest: &Path) -> io::Result<u64> {
    let part_path = partial_path(dest);

    let mut src_file = File::open(src)?;
    let mut part_file = File::create(&part_path)?;

    let mut buffer = vec![0u8; 128 * 1024];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        part_file.write_all(&buffer[0..bytes_read])?;
        total_bytes += bytes_read as u64;
    }

    part_file.sync_all()?;
    // Drop the handle before rename (required on Windows)
    drop(part_file);

    let src_metadata = fs::metadata(src)?;
    fs::set_permissions(&part_path, src_metadata.permissions())?;

    let mtime = src_metadata.modified()?;
    filetime::set_file_mtime(&part_path, filetime::FileTime::from_system_time(mtime))?;

    // Atomic on POSIX; replaces an existing destination in one step
    fs::rename(&part_path, dest)?;

    Ok(total_bytes)
}

/// Temporary sibling path written before the final rename.
///
/// The suffix is appended rather than substituted so `a.txt` and `a.tmp`
/// never collide on the same partial file.
fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".part");
    dest.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_file_round_trip() {
        let temp = TempDir::new().expect("create temp dir");
        let src = temp.path().join("in.bin");
        let dest = temp.path().join("out.bin");
        fs::write(&src, b"some bytes worth copying").expect("write source");

        let bytes = copy_file(&src, &dest).expect("copy should succeed");

        assert_eq!(bytes, 24);
        assert_eq!(
            fs::read(&dest).expect("read destination"),
            b"some bytes worth copying"
        );
        assert!(
            !partial_path(&dest).exists(),
            "partial file must not survive the rename"
        );
    }

    #[test]
    fn test_copy_empty_file() {
        let temp = TempDir::new().expect("create temp dir");
        let src = temp.path().join("empty");
        let dest = temp.path().join("empty-copy");
        fs::write(&src, b"").expect("write source");

        let bytes = copy_file(&src, &dest).expect("copy should succeed");
        assert_eq!(bytes, 0);
        assert!(dest.exists());
    }

    #[test]
    fn test_partial_path_appends_suffix() {
        assert_eq!(
            partial_path(Path::new("/d/a.txt")),
            PathBuf::from("/d/a.txt.part")
        );
        assert_eq!(partial_path(Path::new("/d/a")), PathBuf::from("/d/a.part"));
    }

    #[test]
    fn test_copy_overwrites_existing_destination() {
        let temp = TempDir::new().expect("create temp dir");
        let src = temp.path().join("new.txt");
        let dest = temp.path().join("old.txt");
        fs::write(&src, b"new").expect("write source");
        fs::write(&dest, b"old-longer-content").expect("write destination");

        copy_file(&src, &dest).expect("copy should succeed");
        assert_eq!(fs::read(&dest).expect("read destination"), b"new");
    }
}
