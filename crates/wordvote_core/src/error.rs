//! Error types for WordVote core.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use wordvote_queue::QueueError;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The request field that failed validation.
///
/// Only used for logging; callers are never told which field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidField {
    /// The slot parameter (`s`).
    Slot,
    /// The word parameter (`i`).
    Word,
    /// The user id parameter (`u`).
    UserId,
}

/// Errors that can occur while processing a submission.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A request parameter is malformed, out of range, or non-canonical.
    #[error("invalid input ({0:?})")]
    InvalidInput(InvalidField),

    /// The word is well-formed but not in the dictionary.
    #[error("word not found")]
    WordNotFound,

    /// The dictionary could not be consulted.
    #[error("dictionary lookup failed: {0}")]
    Lookup(#[from] LookupError),

    /// The submission could not be written to the pending queue.
    #[error("storage error: {0}")]
    Storage(#[from] QueueError),
}

impl CoreError {
    /// Returns true if the request itself was at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, CoreError::InvalidInput(_) | CoreError::WordNotFound)
    }

    /// Returns true if the environment was at fault.
    pub fn is_server_error(&self) -> bool {
        matches!(self, CoreError::Lookup(_) | CoreError::Storage(_))
    }
}

/// Errors raised by word lists.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The dictionary file could not be read.
    #[error("cannot read dictionary {}: {source}", path.display())]
    Io {
        /// The dictionary path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The dictionary file contains no words.
    #[error("dictionary {} is empty", path.display())]
    Empty {
        /// The dictionary path.
        path: PathBuf,
    },
}
