//! FileCandidate - a source file under consideration for one sync pass

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// System/hidden attribute flags for a file or directory.
///
/// On Windows these come from the real file attribute bits. On Unix there is
/// no system attribute, and hidden follows the dot-file convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileAttrs {
    pub hidden: bool,
    pub system: bool,
}

impl FileAttrs {
    /// Probe the attributes of `path` without following symlinks.
    pub fn probe(path: &Path) -> io::Result<FileAttrs> {
        let metadata = std::fs::symlink_metadata(path)?;
        Ok(Self::from_metadata(path, &metadata))
    }

    #[cfg(windows)]
    fn from_metadata(_path: &Path, metadata: &std::fs::Metadata) -> FileAttrs {
        use std::os::windows::fs::MetadataExt;

        const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
        const FILE_ATTRIBUTE_SYSTEM: u32 = 0x4;

        let bits = metadata.file_attributes();
        FileAttrs {
            hidden: bits & FILE_ATTRIBUTE_HIDDEN != 0,
            system: bits & FILE_ATTRIBUTE_SYSTEM != 0,
        }
    }

    #[cfg(not(windows))]
    fn from_metadata(path: &Path, _metadata: &std::fs::Metadata) -> FileAttrs {
        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.starts_with('.'))
            .unwrap_or(false);
        FileAttrs {
            hidden,
            system: false,
        }
    }
}

/// A source file under consideration, with everything the filter and
/// decision stages need already derived.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    /// Absolute path of the source file
    pub path: PathBuf,

    /// Extension wildcard form: `"*.ext"`, or `"*"` for no extension
    pub extension_pattern: String,

    /// System/hidden flags
    pub attrs: FileAttrs,

    /// Last-write timestamp
    pub mtime: SystemTime,
}

impl FileCandidate {
    /// Build a candidate by probing the filesystem metadata of `path`.
    pub fn probe(path: PathBuf) -> io::Result<FileCandidate> {
        let metadata = std::fs::metadata(&path)?;
        let mtime = metadata.modified()?;
        let attrs = FileAttrs::from_metadata(&path, &metadata);
        let extension_pattern = extension_pattern(&path);

        Ok(FileCandidate {
            path,
            extension_pattern,
            attrs,
            mtime,
        })
    }

    /// Containing-directory path, as a string for substring matching.
    pub fn directory_str(&self) -> String {
        self.path
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }
}

/// Build the extension wildcard the exception list is matched against.
fn extension_pattern(path: &Path) -> String {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("*.{}", ext),
        None => "*".to_string(),
    }
}
