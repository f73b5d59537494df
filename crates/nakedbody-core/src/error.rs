//! Error type for body writes.

use std::io;
use std::path::PathBuf;

/// A single body file could not be written. The batch carries on regardless.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// Creating or writing the temp file failed (missing directory, permission denied, disk full).
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The temp file was written but could not be renamed to its final name.
    #[error("failed to rename {} to {}", .temp_path.display(), .path.display())]
    Finalize {
        temp_path: PathBuf,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SaveError {
    /// Final path of the body that was not saved.
    pub fn path(&self) -> &std::path::Path {
        match self {
            SaveError::Write { path, .. } | SaveError::Finalize { path, .. } => path,
        }
    }

    /// Underlying I/O error.
    pub fn io_error(&self) -> &io::Error {
        match self {
            SaveError::Write { source, .. } | SaveError::Finalize { source, .. } => source,
        }
    }
}
