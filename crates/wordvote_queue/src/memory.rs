//! In-memory queue backend for testing.

use crate::backend::{validate_entry_name, QueueBackend};
use crate::error::{QueueError, QueueResult};
use parking_lot::RwLock;
use std::io;

/// An in-memory queue backend.
///
/// Published entries are kept in publication order. Suitable for:
/// - Unit tests of code that publishes submissions
/// - Simulating storage failures with [`InMemoryQueue::failing`]
///
/// # Example
///
/// ```rust
/// use wordvote_queue::{InMemoryQueue, QueueBackend};
///
/// let queue = InMemoryQueue::new();
/// queue.publish("a", b"one").unwrap();
/// assert_eq!(queue.entries(), vec![("a".to_string(), b"one".to_vec())]);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryQueue {
    entries: RwLock<Vec<(String, Vec<u8>)>>,
    fail_with: Option<io::ErrorKind>,
}

impl InMemoryQueue {
    /// Creates a new empty in-memory queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a queue whose every publish fails at the staging step.
    #[must_use]
    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            fail_with: Some(kind),
        }
    }

    /// Returns a copy of all published entries.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, Vec<u8>)> {
        self.entries.read().clone()
    }

    /// Returns the number of published entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing has been published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl QueueBackend for InMemoryQueue {
    fn publish(&self, name: &str, payload: &[u8]) -> QueueResult<()> {
        validate_entry_name(name)?;

        if let Some(kind) = self.fail_with {
            return Err(QueueError::Stage {
                path: name.into(),
                source: io::Error::new(kind, "simulated failure"),
            });
        }

        let mut entries = self.entries.write();
        if entries.iter().any(|(existing, _)| existing == name) {
            return Err(QueueError::Publish {
                path: name.into(),
                source: io::Error::new(io::ErrorKind::AlreadyExists, "entry exists"),
            });
        }
        entries.push((name.to_string(), payload.to_vec()));
        Ok(())
    }
}
