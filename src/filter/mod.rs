//! Exception and attribute filtering

use crate::config::SyncOptions;
use crate::types::FileCandidate;

/// Why a candidate was excluded from a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExcludeReason {
    /// Extension wildcard (`*.ext`) matched an exception verbatim
    ExtensionPattern,

    /// An exception pattern appeared as a substring of the containing directory
    DirectoryPattern,

    /// File carries the system attribute and --skip-system is set
    SystemAttribute,

    /// File carries the hidden attribute and --skip-hidden is set
    HiddenAttribute,
}

/// Decides keep/exclude for each candidate file of a pass.
///
/// The exception list is logically a set: every pattern is tested against
/// every candidate independently, so list order never changes the outcome.
/// Patterns are case-sensitive as authored; no normalization is applied.
pub struct FilterEngine<'a> {
    options: &'a SyncOptions,
}

impl<'a> FilterEngine<'a> {
    pub fn new(options: &'a SyncOptions) -> Self {
        Self { options }
    }

    /// Returns `Some(reason)` if the candidate is excluded, `None` to keep it.
    pub fn exclude_reason(&self, candidate: &FileCandidate) -> Option<ExcludeReason> {
        // Extension wildcard must match an exception entry exactly
        if self
            .options
            .exceptions
            .contains(&candidate.extension_pattern)
        {
            return Some(ExcludeReason::ExtensionPattern);
        }

        // Directory patterns match as plain substrings anywhere in the
        // containing path: "temp" excludes "temporary Files" and "my temp"
        if !self.options.exceptions.is_empty() {
            let directory = candidate.directory_str();
            if self
                .options
                .exceptions
                .iter()
                .any(|pattern| directory.contains(pattern.as_str()))
            {
                return Some(ExcludeReason::DirectoryPattern);
            }
        }

        if self.options.skip_system && candidate.attrs.system {
            return Some(ExcludeReason::SystemAttribute);
        }

        if self.options.skip_hidden && candidate.attrs.hidden {
            return Some(ExcludeReason::HiddenAttribute);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileAttrs;
    use std::path::PathBuf;
    use std::time::UNIX_EPOCH;

    fn candidate(path: &str, attrs: FileAttrs) -> FileCandidate {
        let path = PathBuf::from(path);
        let extension_pattern = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("*.{}", ext),
            None => "*".to_string(),
        };
        FileCandidate {
            path,
            extension_pattern,
            attrs,
            mtime: UNIX_EPOCH,
        }
    }

    fn options_with(exceptions: &[&str]) -> SyncOptions {
        SyncOptions {
            exceptions: exceptions.iter().map(|s| s.to_string()).collect(),
            ..SyncOptions::default()
        }
    }

    #[test]
    fn test_no_exceptions_keeps_everything() {
        let options = options_with(&[]);
        let engine = FilterEngine::new(&options);

        let plain = candidate("/src/notes.txt", FileAttrs::default());
        assert_eq!(engine.exclude_reason(&plain), None);
    }

    #[test]
    fn test_extension_wildcard_excludes_verbatim_match() {
        let options = options_with(&["*.jpg", "*.tmp"]);
        let engine = FilterEngine::new(&options);

        let photo = candidate("/src/photos/holiday.jpg", FileAttrs::default());
        assert_eq!(
            engine.exclude_reason(&photo),
            Some(ExcludeReason::ExtensionPattern)
        );

        let doc = candidate("/src/photos/holiday.pdf", FileAttrs::default());
        assert_eq!(engine.exclude_reason(&doc), None);
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let options = options_with(&["*.jpg"]);
        let engine = FilterEngine::new(&options);

        let upper = candidate("/src/holiday.JPG", FileAttrs::default());
        assert_eq!(engine.exclude_reason(&upper), None);
    }

    #[test]
    fn test_directory_pattern_matches_substring_anywhere() {
        let options = options_with(&["temp"]);
        let engine = FilterEngine::new(&options);

        for dir in ["/src/temp", "/src/temporary Files", "/src/my temp/deep"] {
            let file = candidate(&format!("{}/file.txt", dir), FileAttrs::default());
            assert_eq!(
                engine.exclude_reason(&file),
                Some(ExcludeReason::DirectoryPattern),
                "pattern 'temp' should exclude files under {}",
                dir
            );
        }

        let kept = candidate("/src/documents/file.txt", FileAttrs::default());
        assert_eq!(engine.exclude_reason(&kept), None);
    }

    #[test]
    fn test_directory_pattern_does_not_match_file_name() {
        let options = options_with(&["temp"]);
        let engine = FilterEngine::new(&options);

        // Only the containing directory is tested, never the file name itself
        let file = candidate("/src/docs/temp.txt", FileAttrs::default());
        assert_eq!(engine.exclude_reason(&file), None);
    }

    #[test]
    fn test_pattern_order_does_not_matter() {
        let forward = options_with(&["*.jpg", "temp"]);
        let backward = options_with(&["temp", "*.jpg"]);
        let file = candidate("/src/temp/shot.jpg", FileAttrs::default());

        let a = FilterEngine::new(&forward).exclude_reason(&file);
        let b = FilterEngine::new(&backward).exclude_reason(&file);
        assert!(a.is_some());
        assert!(b.is_some());
    }

    #[test]
    fn test_skip_system_flag() {
        let mut options = options_with(&[]);
        options.skip_system = true;
        let engine = FilterEngine::new(&options);

        let system = candidate(
            "/src/pagefile.sys",
            FileAttrs {
                hidden: false,
                system: true,
            },
        );
        assert_eq!(
            engine.exclude_reason(&system),
            Some(ExcludeReason::SystemAttribute)
        );
    }

    #[test]
    fn test_skip_hidden_flag_on_and_off() {
        let hidden = candidate(
            "/src/.profile",
            FileAttrs {
                hidden: true,
                system: false,
            },
        );

        let mut options = options_with(&[]);
        options.skip_hidden = true;
        assert_eq!(
            FilterEngine::new(&options).exclude_reason(&hidden),
            Some(ExcludeReason::HiddenAttribute)
        );

        options.skip_hidden = false;
        assert_eq!(FilterEngine::new(&options).exclude_reason(&hidden), None);
    }

    #[test]
    fn test_attributes_ignored_without_flags() {
        let options = options_with(&["*.log"]);
        let engine = FilterEngine::new(&options);

        let hidden_system = candidate(
            "/src/.cache",
            FileAttrs {
                hidden: true,
                system: true,
            },
        );
        assert_eq!(engine.exclude_reason(&hidden_system), None);
    }
}
