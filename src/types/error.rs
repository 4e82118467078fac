//! Error types for dsync

use std::path::PathBuf;
use thiserror::Error;

/// Error types for dsync operations
#[derive(Debug, Error)]
pub enum SyncError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source root does not exist; fatal before any pass runs
    #[error("Invalid source directory: {path}")]
    InvalidSourceRoot { path: PathBuf },

    /// Source and destination resolve to the same directory
    #[error("Source and destination cannot be the same directory")]
    SameSourceDestination,

    /// Destination root could not be created; fatal before any pass runs
    #[error("Failed to create destination directory {path}: {source}")]
    DestinationRootCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A destination subdirectory could not be created; fatal to the current pass
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A single file copy failed; fatal to the current pass
    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    /// The confirm-mode prompt could not be read
    #[error("Failed to read confirmation: {0}")]
    Prompt(std::io::Error),
}

impl SyncError {
    /// Errors that abort the whole run before any pass starts.
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            SyncError::InvalidSourceRoot { .. }
                | SyncError::SameSourceDestination
                | SyncError::DestinationRootCreate { .. }
        )
    }

    /// Errors that abort only the pass they occurred in.
    pub fn is_pass_fatal(&self) -> bool {
        matches!(
            self,
            SyncError::CreateDir { .. } | SyncError::Copy { .. } | SyncError::Prompt(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_io_error_automatic_conversion() {
        let io_error = IoError::new(ErrorKind::NotFound, "file not found");
        let sync_error: SyncError = io_error.into();

        assert!(matches!(sync_error, SyncError::Io(_)));
        assert!(sync_error.to_string().contains("IO error"));
    }

    #[test]
    fn test_invalid_source_root_display() {
        let error = SyncError::InvalidSourceRoot {
            path: PathBuf::from("/missing/src"),
        };
        assert!(error.to_string().contains("Invalid source directory"));
        assert!(error.to_string().contains("/missing/src"));
        assert!(error.is_setup_error());
        assert!(!error.is_pass_fatal());
    }

    #[test]
    fn test_destination_root_create_is_setup_error() {
        let error = SyncError::DestinationRootCreate {
            path: PathBuf::from("/ro/dst"),
            source: IoError::new(ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.is_setup_error());
        assert!(error.to_string().contains("/ro/dst"));
    }

    #[test]
    fn test_copy_failure_is_pass_fatal() {
        let error = SyncError::Copy {
            from: PathBuf::from("a.txt"),
            to: PathBuf::from("b/a.txt"),
            source: IoError::new(ErrorKind::StorageFull, "disk full"),
        };
        assert!(error.is_pass_fatal());
        assert!(!error.is_setup_error());
        assert!(error.to_string().contains("a.txt"));
    }

    #[test]
    fn test_create_dir_failure_is_pass_fatal() {
        let error = SyncError::CreateDir {
            path: PathBuf::from("b/nested"),
            source: IoError::new(ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.is_pass_fatal());
        assert!(error.to_string().contains("b/nested"));
    }

    #[test]
    fn test_result_propagation() {
        fn inner_function() -> Result<(), SyncError> {
            Err(SyncError::SameSourceDestination)
        }

        fn outer_function() -> Result<(), SyncError> {
            inner_function()?;
            Ok(())
        }

        let result = outer_function();
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            SyncError::SameSourceDestination
        ));
    }
}
