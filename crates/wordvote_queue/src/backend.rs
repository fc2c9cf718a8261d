//! Queue backend trait definition.

use crate::error::{QueueError, QueueResult};

/// A pending-entry queue that publishes opaque payloads.
///
/// # Invariants
///
/// - `publish` either makes the complete payload visible under `name`, or
///   makes nothing visible
/// - A published entry is never modified afterwards
/// - Backends never read back, reorder, or delete published entries
/// - Backends must be `Send + Sync`; concurrent publishers with distinct
///   names never interfere with each other
///
/// # Implementors
///
/// - [`super::DirectoryQueue`] - For persistent, crash-safe publication
/// - [`super::InMemoryQueue`] - For testing
pub trait QueueBackend: Send + Sync {
    /// Publishes `payload` under the entry `name`.
    ///
    /// `name` must be unique across all publishers of this queue.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `name` is not a valid entry name
    /// - The payload could not be fully written (nothing becomes visible)
    /// - The payload could not be made visible
    fn publish(&self, name: &str, payload: &[u8]) -> QueueResult<()>;
}

/// Checks that `name` can be used as a queue entry name.
///
/// Entry names become file names, so they must be non-empty and consist of
/// ASCII alphanumerics, `-` or `_` only.
///
/// # Errors
///
/// Returns [`QueueError::InvalidName`] otherwise.
pub fn validate_entry_name(name: &str) -> QueueResult<()> {
    let valid = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');

    if valid {
        Ok(())
    } else {
        Err(QueueError::InvalidName(name.to_string()))
    }
}
