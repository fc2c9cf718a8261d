//! Error types for queue operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for queue operations.
pub type QueueResult<T> = Result<T, QueueError>;

/// Errors that can occur while publishing to a queue.
#[derive(Debug, Error)]
pub enum QueueError {
    /// An I/O error occurred outside of staging or publication.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The queue directory does not exist or is not a directory.
    #[error("queue directory unavailable: {}", path.display())]
    DirectoryUnavailable {
        /// The configured queue directory.
        path: PathBuf,
    },

    /// The entry name cannot be used as a file name.
    #[error("invalid entry name: {0:?}")]
    InvalidName(String),

    /// Writing the staging file failed. Nothing became visible.
    #[error("failed to stage {}: {source}", path.display())]
    Stage {
        /// The staging file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Moving the staging file into place failed, including when the
    /// visible name is already taken.
    ///
    /// The staging file is left behind for an external janitor.
    #[error("failed to publish {}: {source}", path.display())]
    Publish {
        /// The staging file that could not be moved into place.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl QueueError {
    /// Returns true if a staging file may have been left behind.
    pub fn may_leave_orphan(&self) -> bool {
        matches!(self, QueueError::Stage { .. } | QueueError::Publish { .. })
    }
}
