use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the patcher
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("target file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("target file is not valid UTF-8: {path} ({source})")]
    Encoding {
        path: PathBuf,
        source: std::str::Utf8Error,
    },

    #[error("IO error: {source} (path: {path})")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl PatchError {
    /// Create an IO error for the read path, mapping a missing target file
    /// to NotFound
    pub fn io_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source: err }
        }
    }

    /// Create an IO error for the write path. NotFound means a missing
    /// target at read time, so write failures keep their IO kind even when
    /// the parent directory vanished between read and write.
    pub fn write_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: path.into(),
            source: err,
        }
    }

    /// Create an encoding error with path context
    pub fn encoding_error(err: std::str::Utf8Error, path: impl Into<PathBuf>) -> Self {
        Self::Encoding {
            path: path.into(),
            source: err,
        }
    }
}

/// Result type alias using PatchError
pub type PatchResult<T> = Result<T, PatchError>;
