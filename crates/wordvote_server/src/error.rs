//! Error types for the submission server.

use thiserror::Error;
use wordvote_core::LookupError;
use wordvote_queue::QueueError;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors that can occur while configuring or running the server.
///
/// Per-request failures are not errors at this level; they become
/// [`crate::SubmitResponse`] bodies.
#[derive(Error, Debug)]
pub enum ServerError {
    /// A configuration value could not be parsed.
    #[error("invalid configuration value for {key}: {message}")]
    Config {
        /// The configuration key.
        key: String,
        /// What was wrong with it.
        message: String,
    },

    /// The dictionary could not be loaded.
    #[error("dictionary error: {0}")]
    Dictionary(#[from] LookupError),

    /// The pending queue could not be opened.
    #[error("queue error: {0}")]
    Queue(#[from] QueueError),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub(crate) fn config(key: &str, message: impl Into<String>) -> Self {
        ServerError::Config {
            key: key.to_string(),
            message: message.into(),
        }
    }
}
