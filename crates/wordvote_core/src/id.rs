//! Submission identifier.

use std::fmt;
use uuid::Uuid;

/// Unique identifier for a submission, used as its queue entry name.
///
/// Submission IDs are:
/// - The record timestamp in lowercase hex (at least 8 digits), followed by
/// - A random UUID v4 in simple (32 hex digit) form
///
/// The timestamp keeps names roughly time-ordered in directory listings;
/// the UUID makes concurrent submissions in the same second distinct.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionId(String);

impl SubmissionId {
    /// Creates a new random submission ID for the given timestamp.
    #[must_use]
    pub fn generate(timestamp: u64) -> Self {
        Self::from_parts(timestamp, Uuid::new_v4())
    }

    /// Creates a submission ID from its parts.
    #[must_use]
    pub fn from_parts(timestamp: u64, uuid: Uuid) -> Self {
        Self(format!("{timestamp:08x}{}", uuid.simple()))
    }

    /// Returns the ID as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubmissionId({})", self.0)
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
